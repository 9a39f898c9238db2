//! Typed KTP card model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::extract::schema::field;

/// Extracted KTP card data.
///
/// Field names follow the card's own labels; an empty string means the
/// field was not detected. Serialized names match the extraction keys,
/// so the JSON form is the field map with a fixed vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KtpData {
    /// National identity number (Nomor Induk Kependudukan).
    pub nik: String,
    /// Full name.
    pub nama: String,
    /// Place and date of birth.
    pub tempat_tgl_lahir: String,
    /// Sex.
    pub jenis_kelamin: String,
    /// Blood type.
    pub gol_darah: String,
    /// Street address.
    pub alamat: String,
    /// RT/RW administrative code.
    pub rt_rw: String,
    /// Sub-district (kelurahan/desa).
    pub kel_desa: String,
    /// District (kecamatan).
    pub kecamatan: String,
    /// Religion.
    pub agama: String,
    /// Marital status.
    pub status_perkawinan: String,
    /// Occupation.
    pub pekerjaan: String,
    /// Nationality.
    pub kewarganegaraan: String,
    /// Validity date.
    pub berlaku_hingga: String,
    /// Print date at the bottom of the card.
    pub tanggal_cetak: String,
}

impl KtpData {
    /// Build the typed model from an extraction field map.
    pub fn from_fields(fields: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| fields.get(key).cloned().unwrap_or_default();
        Self {
            nik: get(field::NIK),
            nama: get(field::NAMA),
            tempat_tgl_lahir: get(field::TEMPAT_TGL_LAHIR),
            jenis_kelamin: get(field::JENIS_KELAMIN),
            gol_darah: get(field::GOL_DARAH),
            alamat: get(field::ALAMAT),
            rt_rw: get(field::RT_RW),
            kel_desa: get(field::KEL_DESA),
            kecamatan: get(field::KECAMATAN),
            agama: get(field::AGAMA),
            status_perkawinan: get(field::STATUS_PERKAWINAN),
            pekerjaan: get(field::PEKERJAAN),
            kewarganegaraan: get(field::KEWARGANEGARAAN),
            berlaku_hingga: get(field::BERLAKU_HINGGA),
            tanggal_cetak: get(field::TANGGAL_CETAK),
        }
    }

    /// Keys of the fields that were not detected.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            (field::NIK, &self.nik),
            (field::NAMA, &self.nama),
            (field::TEMPAT_TGL_LAHIR, &self.tempat_tgl_lahir),
            (field::JENIS_KELAMIN, &self.jenis_kelamin),
            (field::GOL_DARAH, &self.gol_darah),
            (field::ALAMAT, &self.alamat),
            (field::RT_RW, &self.rt_rw),
            (field::KEL_DESA, &self.kel_desa),
            (field::KECAMATAN, &self.kecamatan),
            (field::AGAMA, &self.agama),
            (field::STATUS_PERKAWINAN, &self.status_perkawinan),
            (field::PEKERJAAN, &self.pekerjaan),
            (field::KEWARGANEGARAAN, &self.kewarganegaraan),
            (field::BERLAKU_HINGGA, &self.berlaku_hingga),
            (field::TANGGAL_CETAK, &self.tanggal_cetak),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(key, _)| key)
        .collect()
    }

    /// True when no field was detected at all.
    pub fn is_empty(&self) -> bool {
        self.missing_fields().len() == crate::extract::schema::KTP_FIELDS.len()
    }

    /// Iterate `(key, value)` pairs in card order, for display.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            (field::NIK, self.nik.as_str()),
            (field::NAMA, self.nama.as_str()),
            (field::TEMPAT_TGL_LAHIR, self.tempat_tgl_lahir.as_str()),
            (field::JENIS_KELAMIN, self.jenis_kelamin.as_str()),
            (field::GOL_DARAH, self.gol_darah.as_str()),
            (field::ALAMAT, self.alamat.as_str()),
            (field::RT_RW, self.rt_rw.as_str()),
            (field::KEL_DESA, self.kel_desa.as_str()),
            (field::KECAMATAN, self.kecamatan.as_str()),
            (field::AGAMA, self.agama.as_str()),
            (field::STATUS_PERKAWINAN, self.status_perkawinan.as_str()),
            (field::PEKERJAAN, self.pekerjaan.as_str()),
            (field::KEWARGANEGARAAN, self.kewarganegaraan.as_str()),
            (field::BERLAKU_HINGGA, self.berlaku_hingga.as_str()),
            (field::TANGGAL_CETAK, self.tanggal_cetak.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_fields_picks_known_keys() {
        let mut fields = BTreeMap::new();
        fields.insert("nik".to_string(), "3201012345670001".to_string());
        fields.insert("nama".to_string(), "BUDI SANTOSO".to_string());
        fields.insert("stray_key".to_string(), "ignored".to_string());

        let card = KtpData::from_fields(&fields);
        assert_eq!(card.nik, "3201012345670001");
        assert_eq!(card.nama, "BUDI SANTOSO");
        assert_eq!(card.alamat, "");
    }

    #[test]
    fn test_missing_fields() {
        let card = KtpData {
            nik: "3201012345670001".to_string(),
            ..Default::default()
        };
        let missing = card.missing_fields();
        assert_eq!(missing.len(), 14);
        assert!(!missing.contains(&"nik"));
    }

    #[test]
    fn test_empty_card() {
        assert!(KtpData::default().is_empty());
    }

    #[test]
    fn test_json_field_names_match_keys() {
        let card = KtpData {
            nik: "1".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["nik"], "1");
        assert_eq!(json["tempat_tgl_lahir"], "");
        assert_eq!(json["tanggal_cetak"], "");
    }
}
