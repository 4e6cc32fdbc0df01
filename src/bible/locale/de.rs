//! German book names (Loccumer Richtlinien abbreviations).

use super::{row, RawBook};
use crate::bible::canon::BOOK_COUNT;

pub(super) static BOOKS: [RawBook; BOOK_COUNT] = [
    // Altes Testament
    row("Gen", "Genesis", &["Gen", "Genesis", "1Mo", "1Mos", "1Mose"], &["Genesis", "Erstes Buch Mose", "1. Buch Mose"]),
    row("Ex", "Exodus", &["Ex", "Exo", "Exodus", "2Mo", "2Mos", "2Mose"], &["Exodus", "Zweites Buch Mose", "2. Buch Mose"]),
    row("Lev", "Levitikus", &["Lev", "Levitikus", "3Mo", "3Mos", "3Mose"], &["Levitikus", "Drittes Buch Mose", "3. Buch Mose"]),
    row("Num", "Numeri", &["Num", "Numeri", "4Mo", "4Mos", "4Mose"], &["Numeri", "Viertes Buch Mose", "4. Buch Mose"]),
    row("Dtn", "Deuteronomium", &["Dtn", "Deuteronomium", "5Mo", "5Mos", "5Mose"], &["Deuteronomium", "Fünftes Buch Mose", "5. Buch Mose"]),
    row("Jos", "Josua", &["Jos", "Josua"], &["Buch Josua"]),
    row("Ri", "Richter", &["Ri", "Richt", "Richter"], &["Buch der Richter"]),
    row("Rut", "Rut", &["Rut", "Ruth"], &["Buch Rut", "Buch Ruth"]),
    row("1Sam", "1. Samuel", &["1Sam", "1Samuel"], &["Erstes Buch Samuel", "1. Buch Samuel"]),
    row("2Sam", "2. Samuel", &["2Sam", "2Samuel"], &["Zweites Buch Samuel", "2. Buch Samuel"]),
    row("1Kön", "1. Könige", &["1Kön", "1Kö", "1Koe", "1Könige"], &["Erstes Buch der Könige", "1. Buch der Könige"]),
    row("2Kön", "2. Könige", &["2Kön", "2Kö", "2Koe", "2Könige"], &["Zweites Buch der Könige", "2. Buch der Könige"]),
    row("1Chr", "1. Chronik", &["1Chr", "1Chron", "1Chronik"], &["Erstes Buch der Chronik", "1. Buch der Chronik"]),
    row("2Chr", "2. Chronik", &["2Chr", "2Chron", "2Chronik"], &["Zweites Buch der Chronik", "2. Buch der Chronik"]),
    row("Esra", "Esra", &["Esr", "Esra"], &["Buch Esra"]),
    row("Neh", "Nehemia", &["Neh", "Nehemia"], &["Buch Nehemia"]),
    row("Est", "Ester", &["Est", "Esth", "Ester", "Esther"], &["Buch Ester", "Buch Esther"]),
    row("Ijob", "Ijob", &["Ijob", "Hiob"], &["Buch Ijob", "Buch Hiob"]),
    row("Ps", "Psalmen", &["Ps", "Psalm", "Psalmen"], &["Buch der Psalmen", "Psalter"]),
    row("Spr", "Sprichwörter", &["Spr", "Sprüche", "Sprichwörter"], &["Buch der Sprichwörter", "Buch der Sprüche"]),
    row("Koh", "Kohelet", &["Koh", "Kohelet", "Pred", "Prediger"], &["Buch Kohelet", "Prediger Salomo"]),
    row("Hld", "Hoheslied", &["Hld", "Hoheslied", "Hohelied"], &["Hohes Lied", "Lied der Lieder"]),
    row("Jes", "Jesaja", &["Jes", "Jesaja"], &["Buch Jesaja"]),
    row("Jer", "Jeremia", &["Jer", "Jeremia"], &["Buch Jeremia"]),
    row("Klgl", "Klagelieder", &["Klgl", "Klag", "Klagelieder"], &["Klagelieder Jeremias"]),
    row("Ez", "Ezechiel", &["Ez", "Ezech", "Ezechiel", "Hes", "Hesekiel"], &["Buch Ezechiel", "Buch Hesekiel"]),
    row("Dan", "Daniel", &["Dan", "Daniel"], &["Buch Daniel"]),
    row("Hos", "Hosea", &["Hos", "Hosea"], &["Buch Hosea"]),
    row("Joel", "Joel", &["Joel"], &["Buch Joel"]),
    row("Am", "Amos", &["Amos"], &["Buch Amos"]),
    row("Obd", "Obadja", &["Obd", "Obadja"], &["Buch Obadja"]),
    row("Jona", "Jona", &["Jon", "Jona"], &["Buch Jona"]),
    row("Mi", "Micha", &["Mi", "Mich", "Micha"], &["Buch Micha"]),
    row("Nah", "Nahum", &["Nah", "Nahum"], &["Buch Nahum"]),
    row("Hab", "Habakuk", &["Hab", "Habakuk"], &["Buch Habakuk"]),
    row("Zef", "Zefanja", &["Zef", "Zefanja", "Zephanja"], &["Buch Zefanja"]),
    row("Hag", "Haggai", &["Hag", "Haggai"], &["Buch Haggai"]),
    row("Sach", "Sacharja", &["Sach", "Sacharja"], &["Buch Sacharja"]),
    row("Mal", "Maleachi", &["Mal", "Maleachi"], &["Buch Maleachi"]),
    // Neues Testament
    row("Mt", "Matthäus", &["Mt", "Mat", "Matth", "Matthäus"], &["Matthäusevangelium", "Evangelium nach Matthäus"]),
    row("Mk", "Markus", &["Mk", "Mark", "Markus"], &["Markusevangelium", "Evangelium nach Markus"]),
    row("Lk", "Lukas", &["Lk", "Luk", "Lukas"], &["Lukasevangelium", "Evangelium nach Lukas"]),
    row("Joh", "Johannes", &["Joh", "Johannes"], &["Johannesevangelium", "Evangelium nach Johannes"]),
    row("Apg", "Apostelgeschichte", &["Apg", "Apostelgeschichte"], &["Apostelgeschichte", "Taten der Apostel"]),
    row("Röm", "Römer", &["Röm", "Roem", "Römer"], &["Römerbrief", "Brief an die Römer"]),
    row("1Kor", "1. Korinther", &["1Kor", "1Korinther"], &["1. Korintherbrief", "Erster Korintherbrief"]),
    row("2Kor", "2. Korinther", &["2Kor", "2Korinther"], &["2. Korintherbrief", "Zweiter Korintherbrief"]),
    row("Gal", "Galater", &["Gal", "Galater"], &["Galaterbrief", "Brief an die Galater"]),
    row("Eph", "Epheser", &["Eph", "Epheser"], &["Epheserbrief", "Brief an die Epheser"]),
    row("Phil", "Philipper", &["Phil", "Philipper"], &["Philipperbrief", "Brief an die Philipper"]),
    row("Kol", "Kolosser", &["Kol", "Kolosser"], &["Kolosserbrief", "Brief an die Kolosser"]),
    row("1Thess", "1. Thessalonicher", &["1Thess", "1Thes", "1Thessalonicher"], &["1. Thessalonicherbrief", "Erster Thessalonicherbrief"]),
    row("2Thess", "2. Thessalonicher", &["2Thess", "2Thes", "2Thessalonicher"], &["2. Thessalonicherbrief", "Zweiter Thessalonicherbrief"]),
    row("1Tim", "1. Timotheus", &["1Tim", "1Timotheus"], &["1. Timotheusbrief", "Erster Timotheusbrief"]),
    row("2Tim", "2. Timotheus", &["2Tim", "2Timotheus"], &["2. Timotheusbrief", "Zweiter Timotheusbrief"]),
    row("Tit", "Titus", &["Tit", "Titus"], &["Titusbrief", "Brief an Titus"]),
    row("Phlm", "Philemon", &["Phlm", "Philem", "Philemon"], &["Philemonbrief", "Brief an Philemon"]),
    row("Hebr", "Hebräer", &["Hebr", "Heb", "Hebräer"], &["Hebräerbrief", "Brief an die Hebräer"]),
    row("Jak", "Jakobus", &["Jak", "Jakobus"], &["Jakobusbrief", "Brief des Jakobus"]),
    row("1Petr", "1. Petrus", &["1Petr", "1Petrus"], &["1. Petrusbrief", "Erster Petrusbrief"]),
    row("2Petr", "2. Petrus", &["2Petr", "2Petrus"], &["2. Petrusbrief", "Zweiter Petrusbrief"]),
    row("1Joh", "1. Johannes", &["1Joh", "1Johannes"], &["1. Johannesbrief", "Erster Johannesbrief"]),
    row("2Joh", "2. Johannes", &["2Joh", "2Johannes"], &["2. Johannesbrief", "Zweiter Johannesbrief"]),
    row("3Joh", "3. Johannes", &["3Joh", "3Johannes"], &["3. Johannesbrief", "Dritter Johannesbrief"]),
    row("Jud", "Judas", &["Jud", "Judas"], &["Judasbrief", "Brief des Judas"]),
    row("Offb", "Offenbarung", &["Offb", "Offenbarung", "Apk", "Apokalypse"], &["Offenbarung des Johannes", "Johannesoffenbarung"]),
];
