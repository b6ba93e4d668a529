//! The 66-book Protestant canon with chapter counts and name resolution.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// A canonical book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Book {
    /// Canonical display name ("1 Corinthians", "Song of Solomon")
    pub name: &'static str,

    /// Number of chapters
    pub chapters: u32,

    /// Testament the book belongs to
    pub testament: Testament,
}

/// Old or New Testament.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Testament {
    Old,
    New,
}

macro_rules! book {
    ($name:expr, $chapters:expr, $t:ident) => {
        Book {
            name: $name,
            chapters: $chapters,
            testament: Testament::$t,
        }
    };
}

/// All books in canonical order.
pub static BOOKS: [Book; 66] = [
    book!("Genesis", 50, Old),
    book!("Exodus", 40, Old),
    book!("Leviticus", 27, Old),
    book!("Numbers", 36, Old),
    book!("Deuteronomy", 34, Old),
    book!("Joshua", 24, Old),
    book!("Judges", 21, Old),
    book!("Ruth", 4, Old),
    book!("1 Samuel", 31, Old),
    book!("2 Samuel", 24, Old),
    book!("1 Kings", 22, Old),
    book!("2 Kings", 25, Old),
    book!("1 Chronicles", 29, Old),
    book!("2 Chronicles", 36, Old),
    book!("Ezra", 10, Old),
    book!("Nehemiah", 13, Old),
    book!("Esther", 10, Old),
    book!("Job", 42, Old),
    book!("Psalms", 150, Old),
    book!("Proverbs", 31, Old),
    book!("Ecclesiastes", 12, Old),
    book!("Song of Solomon", 8, Old),
    book!("Isaiah", 66, Old),
    book!("Jeremiah", 52, Old),
    book!("Lamentations", 5, Old),
    book!("Ezekiel", 48, Old),
    book!("Daniel", 12, Old),
    book!("Hosea", 14, Old),
    book!("Joel", 3, Old),
    book!("Amos", 9, Old),
    book!("Obadiah", 1, Old),
    book!("Jonah", 4, Old),
    book!("Micah", 7, Old),
    book!("Nahum", 3, Old),
    book!("Habakkuk", 3, Old),
    book!("Zephaniah", 3, Old),
    book!("Haggai", 2, Old),
    book!("Zechariah", 14, Old),
    book!("Malachi", 4, Old),
    book!("Matthew", 28, New),
    book!("Mark", 16, New),
    book!("Luke", 24, New),
    book!("John", 21, New),
    book!("Acts", 28, New),
    book!("Romans", 16, New),
    book!("1 Corinthians", 16, New),
    book!("2 Corinthians", 13, New),
    book!("Galatians", 6, New),
    book!("Ephesians", 6, New),
    book!("Philippians", 4, New),
    book!("Colossians", 4, New),
    book!("1 Thessalonians", 5, New),
    book!("2 Thessalonians", 3, New),
    book!("1 Timothy", 6, New),
    book!("2 Timothy", 4, New),
    book!("Titus", 3, New),
    book!("Philemon", 1, New),
    book!("Hebrews", 13, New),
    book!("James", 5, New),
    book!("1 Peter", 5, New),
    book!("2 Peter", 3, New),
    book!("1 John", 5, New),
    book!("2 John", 1, New),
    book!("3 John", 1, New),
    book!("Jude", 1, New),
    book!("Revelation", 22, New),
];

/// Alternate names and abbreviations, lowercase, mapped to canonical names.
const ALIASES: &[(&str, &str)] = &[
    ("gen", "Genesis"),
    ("ge", "Genesis"),
    ("gn", "Genesis"),
    ("ex", "Exodus"),
    ("exo", "Exodus"),
    ("exod", "Exodus"),
    ("lev", "Leviticus"),
    ("lv", "Leviticus"),
    ("num", "Numbers"),
    ("nu", "Numbers"),
    ("deut", "Deuteronomy"),
    ("dt", "Deuteronomy"),
    ("josh", "Joshua"),
    ("judg", "Judges"),
    ("jdg", "Judges"),
    ("ru", "Ruth"),
    ("1 sam", "1 Samuel"),
    ("2 sam", "2 Samuel"),
    ("1 kgs", "1 Kings"),
    ("2 kgs", "2 Kings"),
    ("1 chr", "1 Chronicles"),
    ("1 chron", "1 Chronicles"),
    ("2 chr", "2 Chronicles"),
    ("2 chron", "2 Chronicles"),
    ("neh", "Nehemiah"),
    ("est", "Esther"),
    ("esth", "Esther"),
    ("psalm", "Psalms"),
    ("ps", "Psalms"),
    ("psa", "Psalms"),
    ("pss", "Psalms"),
    ("prov", "Proverbs"),
    ("pr", "Proverbs"),
    ("prv", "Proverbs"),
    ("eccl", "Ecclesiastes"),
    ("eccles", "Ecclesiastes"),
    ("ecc", "Ecclesiastes"),
    ("song", "Song of Solomon"),
    ("song of songs", "Song of Solomon"),
    ("sos", "Song of Solomon"),
    ("isa", "Isaiah"),
    ("jer", "Jeremiah"),
    ("lam", "Lamentations"),
    ("ezek", "Ezekiel"),
    ("eze", "Ezekiel"),
    ("dan", "Daniel"),
    ("dn", "Daniel"),
    ("hos", "Hosea"),
    ("jl", "Joel"),
    ("am", "Amos"),
    ("obad", "Obadiah"),
    ("ob", "Obadiah"),
    ("jon", "Jonah"),
    ("mic", "Micah"),
    ("nah", "Nahum"),
    ("hab", "Habakkuk"),
    ("zeph", "Zephaniah"),
    ("hag", "Haggai"),
    ("zech", "Zechariah"),
    ("mal", "Malachi"),
    ("matt", "Matthew"),
    ("mt", "Matthew"),
    ("mk", "Mark"),
    ("mrk", "Mark"),
    ("lk", "Luke"),
    ("luk", "Luke"),
    ("jn", "John"),
    ("jhn", "John"),
    ("rom", "Romans"),
    ("ro", "Romans"),
    ("1 cor", "1 Corinthians"),
    ("2 cor", "2 Corinthians"),
    ("gal", "Galatians"),
    ("eph", "Ephesians"),
    ("phil", "Philippians"),
    ("php", "Philippians"),
    ("col", "Colossians"),
    ("1 thess", "1 Thessalonians"),
    ("1 thes", "1 Thessalonians"),
    ("2 thess", "2 Thessalonians"),
    ("2 thes", "2 Thessalonians"),
    ("1 tim", "1 Timothy"),
    ("2 tim", "2 Timothy"),
    ("tit", "Titus"),
    ("phlm", "Philemon"),
    ("philem", "Philemon"),
    ("heb", "Hebrews"),
    ("jas", "James"),
    ("jm", "James"),
    ("1 pet", "1 Peter"),
    ("1 pt", "1 Peter"),
    ("2 pet", "2 Peter"),
    ("2 pt", "2 Peter"),
    ("1 jn", "1 John"),
    ("2 jn", "2 John"),
    ("3 jn", "3 John"),
    ("jud", "Jude"),
    ("rev", "Revelation"),
    ("revelations", "Revelation"),
    ("re", "Revelation"),
];

static INDEX: Lazy<HashMap<String, &'static Book>> = Lazy::new(|| {
    let mut index = HashMap::with_capacity(BOOKS.len() + ALIASES.len());
    for book in BOOKS.iter() {
        index.insert(book.name.to_lowercase(), book);
    }
    for (alias, name) in ALIASES {
        if let Some(book) = BOOKS.iter().find(|b| b.name == *name) {
            index.entry((*alias).to_string()).or_insert(book);
        }
    }
    index
});

/// Normalize a user-supplied book name for lookup.
///
/// Lowercases, drops a trailing period, collapses inner whitespace and
/// splits a glued numeric prefix ("1cor" → "1 cor").
fn normalize(name: &str) -> String {
    let name = name.trim().trim_end_matches('.');
    let mut out = String::with_capacity(name.len() + 1);
    for (i, word) in name.split_whitespace().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&word.to_lowercase());
    }

    let bytes = out.as_bytes();
    if bytes.len() > 1 && matches!(bytes[0], b'1'..=b'3') && bytes[1].is_ascii_alphabetic() {
        out.insert(1, ' ');
    }
    out
}

/// Resolve a book name, alias or abbreviation to its canonical book.
pub fn resolve_book(name: &str) -> Option<&'static Book> {
    INDEX.get(&normalize(name)).copied()
}

/// Check if a name resolves to a canonical book.
pub fn is_book(name: &str) -> bool {
    resolve_book(name).is_some()
}

/// Chapter count for a book, or None if the book is unknown.
pub fn chapter_count(name: &str) -> Option<u32> {
    resolve_book(name).map(|b| b.chapters)
}

/// Canonical book names in order.
pub fn book_names() -> Vec<&'static str> {
    BOOKS.iter().map(|b| b.name).collect()
}
