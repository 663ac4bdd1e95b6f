//! Localized message texts, keyed the way the engine has always keyed them.
//! Unknown languages fall back to English; unknown keys echo the key.

pub fn text(key: &str, lang: &str) -> String {
    let lang = match lang.to_lowercase().as_str() {
        l @ ("en" | "de" | "fr" | "nl" | "pl" | "ru") => l.to_string(),
        _ => "en".to_string(),
    };

    let entry = match key {
        "invalidDecimalError" => match lang.as_str() {
            "de" => "Ungültige Dezimalzahl",
            "fr" => "Nombre décimal invalide",
            "nl" => "Ongeldig decimaal getal",
            "pl" => "Nieprawidłowa liczba dziesiętna",
            "ru" => "Неверное десятичное число",
            _ => "Invalid decimal number",
        },
        "invalidIntError" => match lang.as_str() {
            "de" => "Ungültige Ganzzahl",
            "fr" => "Nombre entier invalide",
            "nl" => "Ongeldig geheel getal",
            "pl" => "Nieprawidłowa liczba całkowita",
            "ru" => "Неверное целое число",
            _ => "Invalid integer",
        },
        "noResults" => match lang.as_str() {
            "de" => "keine Ergebnisse",
            "fr" => "aucun résultat",
            "nl" => "geen resultaten",
            "pl" => "brak wyników",
            "ru" => "нет результатов",
            _ => "no results",
        },
        "dictSize" => match lang.as_str() {
            "de" => "Das Wörterbuch enthält {number} Wörter.",
            "fr" => "Le dictionnaire contient {number} mots.",
            "nl" => "Het woordenboek bevat {number} woorden.",
            "pl" => "Słownik zawiera {number} słów.",
            "ru" => "В словаре {number} слов.",
            _ => "There are {number} words in the dictionary.",
        },
        "validWord" => match lang.as_str() {
            "de" => "{word} ist gültiges Na'vi",
            "fr" => "{word} est du na'vi valide",
            "nl" => "{word} is geldig Na'vi",
            "pl" => "{word} to poprawne na'vi",
            "ru" => "{word} — допустимое слово на на'ви",
            _ => "{word} is valid Na'vi",
        },
        "invalidWord" => match lang.as_str() {
            "de" => "{word} ist kein gültiges Na'vi",
            "fr" => "{word} n'est pas du na'vi valide",
            "nl" => "{word} is geen geldig Na'vi",
            "pl" => "{word} to niepoprawne na'vi",
            "ru" => "{word} — недопустимое слово на на'ви",
            _ => "{word} is not valid Na'vi",
        },
        "onsets" => match lang.as_str() {
            "de" => "Anlaute",
            "fr" => "attaques",
            "nl" => "beginklanken",
            "pl" => "nagłosy",
            "ru" => "инициали",
            _ => "onsets",
        },
        "nuclei" => match lang.as_str() {
            "de" => "Silbenkerne",
            "fr" => "noyaux",
            "nl" => "klinkerkernen",
            "pl" => "jądra sylab",
            "ru" => "ядра слогов",
            _ => "nuclei",
        },
        "codas" => match lang.as_str() {
            "de" => "Auslaute",
            "fr" => "codas",
            "nl" => "eindklanken",
            "pl" => "wygłosy",
            "ru" => "финали",
            _ => "codas",
        },
        other => other,
    };

    entry.to_string()
}
