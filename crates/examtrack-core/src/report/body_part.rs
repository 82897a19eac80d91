//! Anatomical body-part classification of exam descriptions.

use super::{sort_descending, CountEntry};
use crate::models::ExamRecord;

/// Ordered keyword → display-label table for anatomical classification.
/// Keywords are unaccented because exam text is typed without accents.
const BODY_PARTS: &[(&str, &str)] = &[
    ("TORAX", "Tórax"),
    ("CRANIO", "Crânio"),
    ("ABDOME", "Abdômen"),
    ("JOELHO", "Joelho"),
    ("COLUNA", "Coluna"),
    ("OMBRO", "Ombro"),
    ("MAO", "Mão"),
    ("PE", "Pé"),
    ("PERNA", "Perna"),
    ("BRACO", "Braço"),
    ("FEMUR", "Fêmur"),
    ("FACE", "Face"),
    ("COTOVELO", "Cotovelo"),
    ("PUNHO", "Punho"),
    ("TORNOZELO", "Tornozelo"),
];

/// Label for records whose exam text matches no keyword.
pub const OTHER_BODY_PART: &str = "Outros";

/// Count exam mentions per body part, most common first.
///
/// Matching is case-insensitive substring containment and fans out: an exam
/// string naming several body parts increments several counters (each at
/// most once per record). A record matching no keyword counts once under
/// [`OTHER_BODY_PART`].
pub fn body_part_breakdown(records: &[ExamRecord]) -> Vec<CountEntry> {
    let mut entries: Vec<CountEntry> = Vec::new();
    for record in records {
        let exam = record.exam.to_uppercase();
        let mut matched = false;
        for (keyword, label) in BODY_PARTS {
            if exam.contains(keyword) {
                bump(&mut entries, label);
                matched = true;
            }
        }
        if !matched {
            bump(&mut entries, OTHER_BODY_PART);
        }
    }
    sort_descending(&mut entries);
    entries
}

fn bump(entries: &mut Vec<CountEntry>, label: &str) {
    match entries.iter_mut().find(|entry| entry.label == label) {
        Some(entry) => entry.count += 1,
        None => entries.push(CountEntry {
            label: label.to_string(),
            count: 1,
        }),
    }
}
