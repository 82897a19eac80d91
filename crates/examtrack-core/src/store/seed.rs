//! Built-in sample dataset used when storage holds no snapshot.

use crate::models::{City, ExamRecord};

/// Legacy seed row; `priority` predates the `patient_number` field.
struct SeedRow {
    id: &'static str,
    sequence: u32,
    date: &'static str,
    name: &'static str,
    exam: &'static str,
    priority: u32,
    location: &'static str,
    technician: &'static str,
    city: &'static str,
}

// Rows 29 and 30 are follow-up exams for the patients of rows 1 and 2.
const SEED_ROWS: &[SeedRow] = &[
    SeedRow {
        id: "1",
        sequence: 7,
        date: "27/01/2025",
        name: "SANTA TERESA BRAGA PEREIRA DE AVILA",
        exam: "TORAX AP, ARCO COSTAL DIREITO",
        priority: 3,
        location: "PRONTO SOCORRO",
        technician: "ZETI",
        city: "SANTA VITÓRIA DO PALMAR",
    },
    SeedRow {
        id: "2",
        sequence: 8,
        date: "27/01/2025",
        name: "ARTHUR SILVA DA SILVA",
        exam: "TORARX PA/P",
        priority: 2,
        location: "PRONTO SOCORRO",
        technician: "ZETI",
        city: "SANTA VITÓRIA DO PALMAR",
    },
    SeedRow {
        id: "3",
        sequence: 9,
        date: "27/01/2025",
        name: "LETICIA PRESTES RODRIGUES",
        exam: "CRANIO",
        priority: 2,
        location: "PRONTO SOCORRO",
        technician: "ZETI",
        city: "CHUÍ",
    },
    SeedRow {
        id: "4",
        sequence: 10,
        date: "27/01/2025",
        name: "GABRIELLE PEREIRA MARTINS",
        exam: "TORAX PA/P",
        priority: 2,
        location: "PRONTO SOCORRO",
        technician: "ZETI",
        city: "SANTA VITÓRIA DO PALMAR",
    },
    SeedRow {
        id: "5",
        sequence: 11,
        date: "27/01/2025",
        name: "ROSA MIRAPALHETE ARIM",
        exam: "TORAX PA/P",
        priority: 2,
        location: "PRONTO SOCORRO",
        technician: "ZETI",
        city: "CHUÍ",
    },
    SeedRow {
        id: "6",
        sequence: 12,
        date: "27/01/2024",
        name: "ROSA ELAINE MENDES",
        exam: "ABDOME AP/P",
        priority: 2,
        location: "SUS",
        technician: "ZETI",
        city: "SANTA VITÓRIA DO PALMAR",
    },
    SeedRow {
        id: "7",
        sequence: 13,
        date: "27/01/2025",
        name: "LINDIZAI MIRAPALHETE DOS SANTOA",
        exam: "C.LOMBO SACRA",
        priority: 2,
        location: "SUS",
        technician: "ZETI",
        city: "CHUÍ",
    },
    SeedRow {
        id: "8",
        sequence: 14,
        date: "27/01/2025",
        name: "MARIA LAURA SANCHEZ CASTERAN",
        exam: "TORAX PA/P",
        priority: 2,
        location: "SUS",
        technician: "ZETI",
        city: "SANTA VITÓRIA DO PALMAR",
    },
    SeedRow {
        id: "9",
        sequence: 15,
        date: "27/01/2025",
        name: "FLANI EDIMILSON DREBES RODRIGUES",
        exam: "BACIA,FEMUR,JOELHO,PERNA,TORNOZELO E PE",
        priority: 14,
        location: "PROTO SOCORRO",
        technician: "ZETI",
        city: "CHUÍ",
    },
    SeedRow {
        id: "10",
        sequence: 16,
        date: "27/01/2025",
        name: "FELIPE CANDIA ARNONI MULLER",
        exam: "ANTEBRACO ESQ",
        priority: 15,
        location: "PARTICULAR",
        technician: "ZETI",
        city: "SANTA VITÓRIA DO PALMAR",
    },
    SeedRow {
        id: "11",
        sequence: 17,
        date: "27/01/2025",
        name: "DARLEI LUIZ GONCALVES LIMA",
        exam: "JOELHO D/E PERNADA/E OMBRO ESQUERDO,CLS, C CERVICAL",
        priority: 15,
        location: "SUS",
        technician: "JOAO PEDRO",
        city: "CHUÍ",
    },
    SeedRow {
        id: "12",
        sequence: 18,
        date: "27/01/2025",
        name: "ODETE CABREIRA SILVEIRA",
        exam: "TORAX",
        priority: 2,
        location: "SUS",
        technician: "JOAO PEDRO",
        city: "SANTA VITÓRIA DO PALMAR",
    },
    SeedRow {
        id: "13",
        sequence: 19,
        date: "27/01/2025",
        name: "EVA MENDES",
        exam: "TORAX ARCOS COSTAIS",
        priority: 4,
        location: "PROTO SOCORRO",
        technician: "JOAO PEDRO",
        city: "CHUÍ",
    },
    SeedRow {
        id: "14",
        sequence: 20,
        date: "27/01/2025",
        name: "ARCELINO DA SILVA",
        exam: "TORAX",
        priority: 2,
        location: "SUS",
        technician: "JOAO PEDRO",
        city: "SANTA VITÓRIA DO PALMAR",
    },
    SeedRow {
        id: "15",
        sequence: 21,
        date: "27/01/2025",
        name: "ERICK HENRIQUE DE SOUZA",
        exam: "TORAX",
        priority: 2,
        location: "SUS",
        technician: "JOAO PEDRO",
        city: "CHUÍ",
    },
    SeedRow {
        id: "16",
        sequence: 22,
        date: "27/01/2025",
        name: "JUAREZ MACHADO",
        exam: "TORAX",
        priority: 1,
        location: "PROTO SOCORRO",
        technician: "JOAO PEDRO",
        city: "SANTA VITÓRIA DO PALMAR",
    },
    SeedRow {
        id: "17",
        sequence: 23,
        date: "27/01/2025",
        name: "CHARLENE GARCIA BORBA",
        exam: "OMBRO E",
        priority: 2,
        location: "PRONTO SOCORRO",
        technician: "FER",
        city: "CHUÍ",
    },
    SeedRow {
        id: "18",
        sequence: 24,
        date: "27/01/2025",
        name: "CEZAR RAFAEL JARDIM FERNANDEZ",
        exam: "TX, ABDOME",
        priority: 2,
        location: "INTERNADO",
        technician: "FER",
        city: "SANTA VITÓRIA DO PALMAR",
    },
    SeedRow {
        id: "19",
        sequence: 25,
        date: "27/01/2025",
        name: "MARIA ROSIMERE SILVEIRA",
        exam: "CC, CLS, PUNHO D",
        priority: 6,
        location: "PARTICULAR",
        technician: "FER",
        city: "CHUÍ",
    },
    SeedRow {
        id: "20",
        sequence: 26,
        date: "27/01/2025",
        name: "ENZO SANTOS CARDOSO",
        exam: "UMERO, COTOVELO, ANTEBRACO",
        priority: 3,
        location: "PRONTO SOCORRO",
        technician: "FER",
        city: "SANTA VITÓRIA DO PALMAR",
    },
    SeedRow {
        id: "21",
        sequence: 1,
        date: "28/01/2025",
        name: "ADENIR DE OLIVEIRA",
        exam: "COLUNA LOMBO SACRA",
        priority: 2,
        location: "SUS",
        technician: "RO",
        city: "CHUÍ",
    },
    SeedRow {
        id: "22",
        sequence: 2,
        date: "28/01/2025",
        name: "OROSMAR SILVA",
        exam: "TORAX PA E PERFIL",
        priority: 2,
        location: "PRONTO SOCORRO",
        technician: "RO",
        city: "SANTA VITÓRIA DO PALMAR",
    },
    SeedRow {
        id: "23",
        sequence: 3,
        date: "28/01/2025",
        name: "URIEL GUTIERREZ DE SOUZA",
        exam: "PERNA, TORNOZELO E PE ESQUERDO",
        priority: 6,
        location: "PRONTO SOCORRO",
        technician: "RO",
        city: "CHUÍ",
    },
    SeedRow {
        id: "24",
        sequence: 4,
        date: "28/01/2025",
        name: "VALNI VIEIRA MACHADO",
        exam: "COTOVELO DIREITO",
        priority: 2,
        location: "PRONTO SOCORRO",
        technician: "RO",
        city: "SANTA VITÓRIA DO PALMAR",
    },
    SeedRow {
        id: "25",
        sequence: 5,
        date: "28/01/2025",
        name: "TIAGO CABREIRA RODRIGUES",
        exam: "JOELHO ESQUERDO",
        priority: 2,
        location: "PRONTO SOCORRO",
        technician: "RO",
        city: "CHUÍ",
    },
    SeedRow {
        id: "26",
        sequence: 6,
        date: "28/01/2025",
        name: "ALVARO ALONSO DE CASTRO",
        exam: "TORAX PA E PERFIL",
        priority: 2,
        location: "SUS",
        technician: "RO",
        city: "SANTA VITÓRIA DO PALMAR",
    },
    SeedRow {
        id: "27",
        sequence: 7,
        date: "28/01/2025",
        name: "JUCIEL NIEVES PIZANE",
        exam: "FACE",
        priority: 4,
        location: "PRONTO SOCORRO",
        technician: "RO",
        city: "CHUÍ",
    },
    SeedRow {
        id: "28",
        sequence: 8,
        date: "28/01/2025",
        name: "FRANCISCO PINILLO ZULUETA",
        exam: "BACIA",
        priority: 2,
        location: "SUS",
        technician: "RO",
        city: "SANTA VITÓRIA DO PALMAR",
    },
    SeedRow {
        id: "29",
        sequence: 9,
        date: "28/01/2025",
        name: "SANTA TERESA BRAGA PEREIRA DE AVILA",
        exam: "CRANIO AP",
        priority: 2,
        location: "PRONTO SOCORRO",
        technician: "MARIA",
        city: "SANTA VITÓRIA DO PALMAR",
    },
    SeedRow {
        id: "30",
        sequence: 10,
        date: "28/01/2025",
        name: "ARTHUR SILVA DA SILVA",
        exam: "COLUNA LOMBAR",
        priority: 3,
        location: "SUS",
        technician: "CARLOS",
        city: "CHUÍ",
    },
];

/// Materialize the sample dataset.
///
/// Maps the legacy `priority` field to `patient_number` and fills any row
/// missing a `city` deterministically (by numeric id parity), so cold starts
/// are reproducible.
pub(super) fn sample_records() -> Vec<ExamRecord> {
    SEED_ROWS
        .iter()
        .map(|row| ExamRecord {
            id: row.id.into(),
            sequence: row.sequence,
            date: row.date.into(),
            name: row.name.into(),
            exam: row.exam.into(),
            patient_number: row.priority,
            location: row.location.into(),
            technician: row.technician.into(),
            city: if row.city.is_empty() {
                fallback_city(row.id).into()
            } else {
                row.city.into()
            },
        })
        .collect()
}

fn fallback_city(id: &str) -> &'static str {
    let numeric = id.parse::<u64>().unwrap_or(0);
    if numeric % 2 == 0 {
        City::SantaVitoriaDoPalmar.label()
    } else {
        City::Chui.label()
    }
}
