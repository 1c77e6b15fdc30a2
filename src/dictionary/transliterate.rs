/// Latin spelling of a single Serbian Cyrillic letter.
///
/// Returns `None` for anything outside the 60-letter table, including
/// Cyrillic letters that only exist in other alphabets (`ы`, `щ`, ...).
pub fn transliterate_char(c: char) -> Option<&'static str> {
    let latin = match c {
        'а' => "a", 'б' => "b", 'в' => "v", 'г' => "g", 'д' => "d",
        'ђ' => "đ", 'е' => "e", 'ж' => "ž", 'з' => "z", 'и' => "i",
        'ј' => "j", 'к' => "k", 'л' => "l", 'љ' => "lj", 'м' => "m",
        'н' => "n", 'њ' => "nj", 'о' => "o", 'п' => "p", 'р' => "r",
        'с' => "s", 'т' => "t", 'ћ' => "ć", 'у' => "u", 'ф' => "f",
        'х' => "h", 'ц' => "c", 'ч' => "č", 'џ' => "dž", 'ш' => "š",

        'А' => "A", 'Б' => "B", 'В' => "V", 'Г' => "G", 'Д' => "D",
        'Ђ' => "Đ", 'Е' => "E", 'Ж' => "Ž", 'З' => "Z", 'И' => "I",
        'Ј' => "J", 'К' => "K", 'Л' => "L", 'Љ' => "Lj", 'М' => "M",
        'Н' => "N", 'Њ' => "Nj", 'О' => "O", 'П' => "P", 'Р' => "R",
        'С' => "S", 'Т' => "T", 'Ћ' => "Ć", 'У' => "U", 'Ф' => "F",
        'Х' => "H", 'Ц' => "C", 'Ч' => "Č", 'Џ' => "Dž", 'Ш' => "Š",
        _ => return None,
    };

    Some(latin)
}

pub fn is_cyrillic(c: char) -> bool {
    transliterate_char(c).is_some()
}

/// Transliterates Serbian Cyrillic to Latin script, one character at a time.
/// Characters without a mapping are copied through unchanged.
pub fn transliterate(word: &str) -> String {
    let mut result = String::with_capacity(word.len());

    for c in word.chars() {
        match transliterate_char(c) {
            Some(latin) => result.push_str(latin),
            None => result.push(c),
        }
    }

    result
}
