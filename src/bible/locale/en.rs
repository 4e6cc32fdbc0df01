//! English book names and SBL-style abbreviations.

use super::{row, RawBook};
use crate::bible::canon::BOOK_COUNT;

pub(super) static BOOKS: [RawBook; BOOK_COUNT] = [
    // Old Testament
    row("Gen", "Genesis", &["Gen", "Gn", "Genesis"], &["Book of Genesis"]),
    row("Exod", "Exodus", &["Ex", "Exo", "Exod", "Exodus"], &["Book of Exodus"]),
    row("Lev", "Leviticus", &["Lev", "Lv", "Leviticus"], &["Book of Leviticus"]),
    row("Num", "Numbers", &["Num", "Nm", "Numb", "Numbers"], &["Book of Numbers"]),
    row("Deut", "Deuteronomy", &["Deut", "Dt", "Deuteronomy"], &["Book of Deuteronomy"]),
    row("Josh", "Joshua", &["Josh", "Jos", "Joshua"], &["Book of Joshua"]),
    row("Judg", "Judges", &["Judg", "Jdg", "Judges"], &["Book of Judges"]),
    row("Ruth", "Ruth", &["Ruth", "Rth"], &["Book of Ruth"]),
    row("1Sam", "1 Samuel", &["1Sam", "1Sa", "1Samuel"], &["First Samuel", "First Book of Samuel"]),
    row("2Sam", "2 Samuel", &["2Sam", "2Sa", "2Samuel"], &["Second Samuel", "Second Book of Samuel"]),
    row("1Kgs", "1 Kings", &["1Kgs", "1Ki", "1Kings"], &["First Kings", "First Book of Kings"]),
    row("2Kgs", "2 Kings", &["2Kgs", "2Ki", "2Kings"], &["Second Kings", "Second Book of Kings"]),
    row("1Chr", "1 Chronicles", &["1Chr", "1Chron", "1Chronicles"], &["First Chronicles"]),
    row("2Chr", "2 Chronicles", &["2Chr", "2Chron", "2Chronicles"], &["Second Chronicles"]),
    row("Ezra", "Ezra", &["Ezra", "Ezr"], &["Book of Ezra"]),
    row("Neh", "Nehemiah", &["Neh", "Nehemiah"], &["Book of Nehemiah"]),
    row("Esth", "Esther", &["Esth", "Est", "Esther"], &["Book of Esther"]),
    row("Job", "Job", &["Job", "Jb"], &["Book of Job"]),
    row("Ps", "Psalms", &["Ps", "Psa", "Pss", "Psalm", "Psalms"], &["Book of Psalms", "Psalter"]),
    row("Prov", "Proverbs", &["Prov", "Prv", "Proverbs"], &["Book of Proverbs"]),
    row("Eccl", "Ecclesiastes", &["Eccl", "Eccles", "Ecc", "Ecclesiastes", "Qoheleth"], &["Book of Ecclesiastes"]),
    row("Song", "Song of Songs", &["Song", "Song of Songs", "Song of Solomon", "Canticles"], &["Song of Songs", "Song of Solomon"]),
    row("Isa", "Isaiah", &["Isa", "Isaiah"], &["Book of Isaiah"]),
    row("Jer", "Jeremiah", &["Jer", "Jeremiah"], &["Book of Jeremiah"]),
    row("Lam", "Lamentations", &["Lam", "Lamentations"], &["Book of Lamentations"]),
    row("Ezek", "Ezekiel", &["Ezek", "Eze", "Ezk", "Ezekiel"], &["Book of Ezekiel"]),
    row("Dan", "Daniel", &["Dan", "Dn", "Daniel"], &["Book of Daniel"]),
    row("Hos", "Hosea", &["Hos", "Hosea"], &["Book of Hosea"]),
    row("Joel", "Joel", &["Joel", "Jl"], &["Book of Joel"]),
    row("Amos", "Amos", &["Amos"], &["Book of Amos"]),
    row("Obad", "Obadiah", &["Obad", "Obadiah"], &["Book of Obadiah"]),
    row("Jonah", "Jonah", &["Jonah", "Jon"], &["Book of Jonah"]),
    row("Mic", "Micah", &["Mic", "Micah"], &["Book of Micah"]),
    row("Nah", "Nahum", &["Nah", "Nahum"], &["Book of Nahum"]),
    row("Hab", "Habakkuk", &["Hab", "Habakkuk"], &["Book of Habakkuk"]),
    row("Zeph", "Zephaniah", &["Zeph", "Zep", "Zephaniah"], &["Book of Zephaniah"]),
    row("Hag", "Haggai", &["Hag", "Haggai"], &["Book of Haggai"]),
    row("Zech", "Zechariah", &["Zech", "Zec", "Zechariah"], &["Book of Zechariah"]),
    row("Mal", "Malachi", &["Mal", "Malachi"], &["Book of Malachi"]),
    // New Testament
    row("Matt", "Matthew", &["Matt", "Mt", "Mat", "Matthew"], &["Gospel of Matthew", "Gospel according to Matthew"]),
    row("Mark", "Mark", &["Mark", "Mk", "Mrk"], &["Gospel of Mark", "Gospel according to Mark"]),
    row("Luke", "Luke", &["Luke", "Lk", "Luk"], &["Gospel of Luke", "Gospel according to Luke"]),
    row("John", "John", &["John", "Jn", "Jhn"], &["Gospel of John", "Gospel according to John"]),
    row("Acts", "Acts", &["Acts", "Acts of the Apostles"], &["Acts of the Apostles", "Book of Acts"]),
    row("Rom", "Romans", &["Rom", "Ro", "Romans"], &["Epistle to the Romans", "Letter to the Romans"]),
    row("1Cor", "1 Corinthians", &["1Cor", "1Co", "1Corinthians"], &["First Corinthians", "First Epistle to the Corinthians"]),
    row("2Cor", "2 Corinthians", &["2Cor", "2Co", "2Corinthians"], &["Second Corinthians", "Second Epistle to the Corinthians"]),
    row("Gal", "Galatians", &["Gal", "Galatians"], &["Epistle to the Galatians", "Letter to the Galatians"]),
    row("Eph", "Ephesians", &["Eph", "Ephes", "Ephesians"], &["Epistle to the Ephesians", "Letter to the Ephesians"]),
    row("Phil", "Philippians", &["Phil", "Php", "Philippians"], &["Epistle to the Philippians", "Letter to the Philippians"]),
    row("Col", "Colossians", &["Col", "Colossians"], &["Epistle to the Colossians", "Letter to the Colossians"]),
    row("1Thess", "1 Thessalonians", &["1Thess", "1Thes", "1Th", "1Thessalonians"], &["First Thessalonians"]),
    row("2Thess", "2 Thessalonians", &["2Thess", "2Thes", "2Th", "2Thessalonians"], &["Second Thessalonians"]),
    row("1Tim", "1 Timothy", &["1Tim", "1Ti", "1Timothy"], &["First Timothy"]),
    row("2Tim", "2 Timothy", &["2Tim", "2Ti", "2Timothy"], &["Second Timothy"]),
    row("Titus", "Titus", &["Titus", "Tit"], &["Epistle to Titus", "Letter to Titus"]),
    row("Phlm", "Philemon", &["Phlm", "Philem", "Phm", "Philemon"], &["Epistle to Philemon", "Letter to Philemon"]),
    row("Heb", "Hebrews", &["Heb", "Hebrews"], &["Epistle to the Hebrews", "Letter to the Hebrews"]),
    row("Jas", "James", &["Jas", "Jm", "James"], &["Epistle of James", "Letter of James"]),
    row("1Pet", "1 Peter", &["1Pet", "1Pe", "1Peter"], &["First Peter"]),
    row("2Pet", "2 Peter", &["2Pet", "2Pe", "2Peter"], &["Second Peter"]),
    row("1John", "1 John", &["1John", "1Jn", "1Jhn"], &["First John"]),
    row("2John", "2 John", &["2John", "2Jn", "2Jhn"], &["Second John"]),
    row("3John", "3 John", &["3John", "3Jn", "3Jhn"], &["Third John"]),
    row("Jude", "Jude", &["Jude", "Jud"], &["Epistle of Jude", "Letter of Jude"]),
    row("Rev", "Revelation", &["Rev", "Revelation", "Revelations", "Apocalypse"], &["Book of Revelation", "Revelation to John"]),
];
