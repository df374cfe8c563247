/// Title-cases a string the way the food list screens display names.
///
/// A letter is upper-cased when the previous character is not a letter and
/// lower-cased otherwise, so `"7up"` becomes `"7Up"` and `"o'neil"` becomes
/// `"O'Neil"`.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut previous_is_letter = false;

    for c in value.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(c);
            previous_is_letter = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_words() {
        assert_eq!(title_case("chicken breast"), "Chicken Breast");
        assert_eq!(title_case("OLIVE OIL"), "Olive Oil");
    }

    #[test]
    fn test_title_case_after_non_letters() {
        assert_eq!(title_case("7up"), "7Up");
        assert_eq!(title_case("o'neil"), "O'Neil");
        assert_eq!(title_case("sun-dried tomato"), "Sun-Dried Tomato");
    }

    #[test]
    fn test_title_case_unicode() {
        assert_eq!(title_case("jalapeño pepper"), "Jalapeño Pepper");
        assert_eq!(title_case(""), "");
    }
}
