//! Candidate pools for synthetic names.

pub use user_core::FILTER_LETTER;

pub const MALE_FIRST_NAMES: &[&str] = &["Alexander", "Ivan", "Maxim", "Dmitry", "Artem"];

pub const FEMALE_FIRST_NAMES: &[&str] = &["Sophia", "Anna", "Maria", "Victoria", "Daria"];

/// Male forms; the female form appends [`FEMALE_SUFFIX`].
pub const LAST_NAME_ROOTS: &[&str] = &[
    "Ivanov",
    "Smirnov",
    "Kuznetsov",
    "Popov",
    "Vasiliev",
    "Petrov",
    "Sokolov",
    "Mikhailov",
    "Fedorov",
    "Morozov",
];

pub const MALE_PATRONYMICS: &[&str] = &[
    "Sergeevich",
    "Alexandrovich",
    "Dmitrievich",
    "Andreevich",
    "Ivanovich",
];

pub const FEMALE_PATRONYMICS: &[&str] = &[
    "Sergeevna",
    "Alexandrovna",
    "Dmitrievna",
    "Andreevna",
    "Ivanovna",
];

pub const FEMALE_SUFFIX: &str = "a";

/// Last name roots starting with [`FILTER_LETTER`].
pub fn filter_last_names() -> Vec<&'static str> {
    LAST_NAME_ROOTS
        .iter()
        .copied()
        .filter(|name| name.starts_with(FILTER_LETTER))
        .collect()
}

/// Feminine form of a last name root.
pub fn feminize(root: &str) -> String {
    format!("{root}{FEMALE_SUFFIX}")
}
