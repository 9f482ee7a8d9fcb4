use crate::scoring::{AnswerOption, Category, Question};
use crate::Instrument;

/// IDAI pediatric tuberculosis scoring system.
/// Eight findings across six clinical groups. Maximum total 20;
/// the IDAI guideline reads `>= 6` as probable TB.
pub struct IdaiTb;

impl Instrument for IdaiTb {
    fn id(&self) -> &str {
        "idai_tb"
    }

    fn name(&self) -> &str {
        "IDAI Pediatric TB Score"
    }

    fn categories(&self) -> &[Category] {
        static CATEGORIES: std::sync::LazyLock<Vec<Category>> = std::sync::LazyLock::new(|| {
            let absent_present = |present_points| {
                vec![
                    AnswerOption::new(0, "Tidak ada", 0),
                    AnswerOption::new(1, "Ada", present_points),
                ]
            };

            vec![
                Category::new(
                    "Riwayat dan Kontak",
                    vec![Question::new(
                        "exposure",
                        "Riwayat kontak/paparan dengan pasien TB?",
                        vec![
                            AnswerOption::new(0, "Tidak ada kontak/paparan", 0),
                            AnswerOption::new(1, "Tidak jelas atau tidak diketahui", 1),
                            AnswerOption::new(2, "Kontak dengan pasien TB BTA (-)", 2),
                            AnswerOption::new(3, "Kontak dengan pasien TB BTA (+)", 3),
                        ],
                    )],
                ),
                Category::new(
                    "Uji Tuberkulin",
                    vec![Question::new(
                        "tuberculinTest",
                        "Hasil Uji Tuberkulin (Mantoux)?",
                        vec![
                            AnswerOption::new(0, "Negatif (< 5mm)", 0),
                            AnswerOption::new(1, "Meragukan (5-9mm)", 1),
                            AnswerOption::new(2, "Positif (≥ 10mm) atau reaksi vesikular", 3),
                        ],
                    )],
                ),
                Category::new(
                    "Status Gizi",
                    vec![Question::new(
                        "nutritionalStatus",
                        "Berat badan/keadaan gizi?",
                        vec![
                            AnswerOption::new(0, "Gizi baik (BB/TB > 90%)", 0),
                            AnswerOption::new(1, "Gizi kurang (BB/TB 70-90%)", 1),
                            AnswerOption::new(2, "Gizi buruk (BB/TB < 70%)", 3),
                        ],
                    )],
                ),
                Category::new(
                    "Gejala Klinis",
                    vec![
                        Question::new(
                            "fever",
                            "Demam tanpa sebab jelas ≥ 2 minggu?",
                            absent_present(1),
                        ),
                        Question::new("cough", "Batuk kronik ≥ 2 minggu?", absent_present(1)),
                    ],
                ),
                Category::new(
                    "Pemeriksaan Fisik",
                    vec![
                        Question::new(
                            "lymphNodes",
                            "Pembesaran kelenjar limfe (aksila, inguinal)?",
                            vec![
                                AnswerOption::new(0, "Tidak ada", 0),
                                AnswerOption::new(1, "Ada, ukuran kecil (< 2cm)", 1),
                                AnswerOption::new(2, "Ada, multipel atau besar (≥ 2cm)", 3),
                            ],
                        ),
                        Question::new(
                            "jointSwelling",
                            "Pembengkakan tulang/sendi (panggul, lutut, falang)?",
                            absent_present(3),
                        ),
                    ],
                ),
                Category::new(
                    "Pemeriksaan Penunjang",
                    vec![Question::new(
                        "chestXray",
                        "Foto toraks (rontgen dada)?",
                        vec![
                            AnswerOption::new(0, "Normal", 0),
                            AnswerOption::new(1, "Gambaran TB tidak jelas", 1),
                            AnswerOption::new(2, "Gambaran TB jelas", 3),
                        ],
                    )],
                ),
            ]
        });
        &CATEGORIES
    }
}
