//! The two stroke prediction forms
//!
//! `demographic` is the original attribute set (gender, age, BMI, work and smoking
//! history). `vitals` is the extended set the current service model accepts, including
//! heart rate, oxygen saturation, body temperature and blood pressure.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::FormError,
    schema::{FieldKind, FieldSpec, FormSchema, SelectOption, SubmitAs},
};

const NO_YES: &[SelectOption] = &[
    SelectOption { value: "0", label: "No" },
    SelectOption { value: "1", label: "Yes" },
];

const YES_NO: &[SelectOption] = &[
    SelectOption { value: "1", label: "Yes" },
    SelectOption { value: "0", label: "No" },
];

const DEMOGRAPHIC_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "gender",
        label: "Gender",
        kind: FieldKind::Select {
            options: &[
                SelectOption { value: "1", label: "Male" },
                SelectOption { value: "0", label: "Female" },
                SelectOption { value: "-1", label: "Other" },
            ],
        },
        default: "1",
        submit_as: SubmitAs::Text,
    },
    FieldSpec {
        name: "age",
        label: "Usia",
        kind: FieldKind::Number { step: 0.1 },
        default: "50",
        submit_as: SubmitAs::Float,
    },
    FieldSpec {
        name: "hypertension",
        label: "Riwayat Hipertensi",
        kind: FieldKind::Select { options: NO_YES },
        default: "1",
        submit_as: SubmitAs::Text,
    },
    FieldSpec {
        name: "heart_disease",
        label: "Riwayat Penyakit Jantung",
        kind: FieldKind::Select { options: NO_YES },
        default: "0",
        submit_as: SubmitAs::Text,
    },
    FieldSpec {
        name: "ever_married",
        label: "Sudah Menikah",
        kind: FieldKind::Select { options: YES_NO },
        default: "1",
        submit_as: SubmitAs::Text,
    },
    FieldSpec {
        name: "work_type",
        label: "Tipe Pekerjaan",
        kind: FieldKind::Select {
            options: &[
                SelectOption { value: "0", label: "Private" },
                SelectOption { value: "1", label: "Self-employed" },
                SelectOption { value: "2", label: "Government Job" },
                SelectOption { value: "-1", label: "Children" },
                SelectOption { value: "-2", label: "Never Worked" },
            ],
        },
        default: "2",
        submit_as: SubmitAs::Text,
    },
    FieldSpec {
        name: "bmi",
        label: "BMI",
        kind: FieldKind::Number { step: 0.1 },
        default: "100",
        submit_as: SubmitAs::Float,
    },
    FieldSpec {
        name: "smoking_status",
        label: "Status Merokok",
        kind: FieldKind::Select {
            options: &[
                SelectOption { value: "0", label: "Never Smoked" },
                SelectOption { value: "1", label: "Unknown" },
                SelectOption { value: "2", label: "Formerly Smoked" },
                SelectOption { value: "3", label: "Smokes" },
            ],
        },
        default: "0",
        submit_as: SubmitAs::Text,
    },
];

const TIDAK_YA: &[SelectOption] = &[
    SelectOption { value: "0", label: "Tidak" },
    SelectOption { value: "1", label: "Ya" },
];

const fn whole_number(name: &'static str, label: &'static str, default: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind: FieldKind::Number { step: 1.0 },
        default,
        submit_as: SubmitAs::Text,
    }
}

const VITALS_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "jenis_kelamin",
        label: "Jenis Kelamin",
        kind: FieldKind::Select {
            options: &[
                SelectOption { value: "1", label: "Laki-laki" },
                SelectOption { value: "0", label: "Perempuan" },
            ],
        },
        default: "1",
        submit_as: SubmitAs::Text,
    },
    whole_number("usia", "Usia (tahun)", "70"),
    FieldSpec {
        name: "riwayat_hipertensi",
        label: "Riwayat Hipertensi",
        kind: FieldKind::Select { options: TIDAK_YA },
        default: "1",
        submit_as: SubmitAs::Text,
    },
    FieldSpec {
        name: "riwayat_penyakit_jantung",
        label: "Riwayat Penyakit Jantung",
        kind: FieldKind::Select { options: TIDAK_YA },
        default: "1",
        submit_as: SubmitAs::Text,
    },
    FieldSpec {
        name: "sudah_menikah",
        label: "Sudah Menikah",
        kind: FieldKind::Select { options: TIDAK_YA },
        default: "1",
        submit_as: SubmitAs::Text,
    },
    whole_number("berat_badan", "Berat Badan (kg)", "70"),
    FieldSpec {
        name: "riwayat_merokok",
        label: "Riwayat Merokok",
        kind: FieldKind::Select {
            options: &[
                SelectOption { value: "0", label: "Tidak Merokok" },
                SelectOption { value: "1", label: "Merokok" },
            ],
        },
        default: "1",
        submit_as: SubmitAs::Text,
    },
    whole_number("detak_jantung", "Detak Jantung (bpm)", "90"),
    whole_number("saturasi_oksigen", "Saturasi Oksigen (%)", "99"),
    FieldSpec {
        name: "suhu_tubuh",
        label: "Suhu Tubuh (°C)",
        kind: FieldKind::Number { step: 0.1 },
        default: "36.5",
        submit_as: SubmitAs::Float,
    },
    whole_number("tekanan_sistolik", "Tekanan Sistolik (mmHg)", "200"),
    whole_number("tekanan_diastolik", "Tekanan Diastolik (mmHg)", "150"),
];

/// Stroke Prediction form (demographic attributes)
pub const DEMOGRAPHIC: FormSchema = FormSchema {
    id: "demographic",
    title: "Stroke Prediction",
    fields: DEMOGRAPHIC_FIELDS,
};

/// Prediksi Stroke form (vital signs)
pub const VITALS: FormSchema = FormSchema {
    id: "vitals",
    title: "Prediksi Risiko Stroke",
    fields: VITALS_FIELDS,
};

/// Which form to present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormVariant {
    #[default]
    Demographic,
    Vitals,
}

impl FormVariant {
    pub const ALL: [FormVariant; 2] = [FormVariant::Demographic, FormVariant::Vitals];

    pub fn schema(&self) -> &'static FormSchema {
        match self {
            FormVariant::Demographic => &DEMOGRAPHIC,
            FormVariant::Vitals => &VITALS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.schema().id
    }
}

impl fmt::Display for FormVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormVariant {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "demographic" | "v1" => Ok(FormVariant::Demographic),
            "vitals" | "v2" => Ok(FormVariant::Vitals),
            other => Err(FormError::UnknownVariant(other.to_string())),
        }
    }
}
