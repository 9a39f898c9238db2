//! Static field catalogue for the Indonesian KTP card.
//!
//! The matching algorithm is written once against this table; adding or
//! reordering a field is a data change, not a code change. Aliases are
//! tried in declared order, so the canonical label comes first and the
//! common OCR misreads follow.

/// Stable field keys, in card order.
pub mod field {
    pub const NIK: &str = "nik";
    pub const NAMA: &str = "nama";
    pub const TEMPAT_TGL_LAHIR: &str = "tempat_tgl_lahir";
    pub const JENIS_KELAMIN: &str = "jenis_kelamin";
    pub const GOL_DARAH: &str = "gol_darah";
    pub const ALAMAT: &str = "alamat";
    pub const RT_RW: &str = "rt_rw";
    pub const KEL_DESA: &str = "kel_desa";
    pub const KECAMATAN: &str = "kecamatan";
    pub const AGAMA: &str = "agama";
    pub const STATUS_PERKAWINAN: &str = "status_perkawinan";
    pub const PEKERJAAN: &str = "pekerjaan";
    pub const KEWARGANEGARAAN: &str = "kewarganegaraan";
    pub const BERLAKU_HINGGA: &str = "berlaku_hingga";
    pub const TANGGAL_CETAK: &str = "tanggal_cetak";
}

/// One target field: a stable key, the label variants to search for,
/// and whether an inline `label: value` capture is trustworthy.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Stable key used in the extraction result.
    pub key: &'static str,
    /// Label variants, tried in declared order.
    pub aliases: &'static [&'static str],
    /// Whether a value captured on the label's own line is accepted.
    ///
    /// Short codes (blood type) are indistinguishable from noise when
    /// captured inline and are only read from the following line.
    pub allow_inline: bool,
}

/// The KTP field catalogue, in card order.
///
/// `tanggal_cetak` carries no aliases: the card prints it without a
/// label and it is filled by the date recovery pass instead.
pub const KTP_FIELDS: &[FieldSpec] = &[
    FieldSpec { key: field::NIK, aliases: &["NIK"], allow_inline: true },
    FieldSpec { key: field::NAMA, aliases: &["Nama"], allow_inline: true },
    FieldSpec {
        key: field::TEMPAT_TGL_LAHIR,
        aliases: &["Tempat/Tgl Lahir", "Tempat/Tg Lahir", "Tempat Tgl Lahir"],
        allow_inline: true,
    },
    FieldSpec {
        key: field::JENIS_KELAMIN,
        aliases: &["Jenis Kelamin", "Jenis Kelamln"],
        allow_inline: true,
    },
    FieldSpec {
        key: field::GOL_DARAH,
        aliases: &["Gol. Darah", "Gol Darah", "Gol.Darah"],
        allow_inline: false,
    },
    FieldSpec { key: field::ALAMAT, aliases: &["Alamat"], allow_inline: true },
    FieldSpec { key: field::RT_RW, aliases: &["RT/RW", "RTRW"], allow_inline: true },
    FieldSpec {
        key: field::KEL_DESA,
        aliases: &["Kel/Desa", "Kel/ Desa", "KelDesa"],
        allow_inline: true,
    },
    FieldSpec { key: field::KECAMATAN, aliases: &["Kecamatan"], allow_inline: true },
    FieldSpec { key: field::AGAMA, aliases: &["Agama"], allow_inline: true },
    FieldSpec {
        key: field::STATUS_PERKAWINAN,
        aliases: &["Status Perkawinan", "Status Perkawlnan"],
        allow_inline: true,
    },
    FieldSpec {
        key: field::PEKERJAAN,
        aliases: &["Pekerjaan", "Pekerjan"],
        allow_inline: true,
    },
    FieldSpec {
        key: field::KEWARGANEGARAAN,
        aliases: &["Kewarganegaraan"],
        allow_inline: true,
    },
    FieldSpec {
        key: field::BERLAKU_HINGGA,
        aliases: &["Berlaku Hingga", "Berlaku"],
        allow_inline: true,
    },
    FieldSpec { key: field::TANGGAL_CETAK, aliases: &[], allow_inline: false },
];

/// Union of every field key and alias text in a schema.
///
/// This is the exclusion vocabulary: a candidate value that contains any
/// of these terms is a neighboring label, not data.
pub fn vocabulary(schema: &[FieldSpec]) -> Vec<&'static str> {
    schema
        .iter()
        .flat_map(|spec| std::iter::once(spec.key).chain(spec.aliases.iter().copied()))
        .collect()
}
