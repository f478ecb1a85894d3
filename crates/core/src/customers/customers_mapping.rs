//! Header-keyword field mapping for the customer sheet.
//!
//! Sheet headers drift (branches rename columns, add prefixes), so each
//! logical field is resolved by case-insensitive substring match against a
//! keyword list. Built-in defaults cover the canonical sheet; per-tenant
//! overrides come from the backend and win over the defaults.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Logical fields of a customer row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CustomerField {
    Id,
    Name,
    Phone,
    Flag,
    Status,
    DelinquencyTag,
    DueDate,
    PayoffDate,
    PrsDate,
    Outstanding,
    Plafond,
    Savings,
    Officer,
    Sentra,
    Dpd,
    Notes,
}

impl CustomerField {
    /// Stable string key used in the backend override table.
    pub fn key(&self) -> &'static str {
        match self {
            CustomerField::Id => "id",
            CustomerField::Name => "name",
            CustomerField::Phone => "phone",
            CustomerField::Flag => "flag",
            CustomerField::Status => "status",
            CustomerField::DelinquencyTag => "flagMenunggak",
            CustomerField::DueDate => "tglJatuhTempo",
            CustomerField::PayoffDate => "tglLunas",
            CustomerField::PrsDate => "tglPrs",
            CustomerField::Outstanding => "outstanding",
            CustomerField::Plafond => "plafon",
            CustomerField::Savings => "saldoTabungan",
            CustomerField::Officer => "co",
            CustomerField::Sentra => "sentra",
            CustomerField::Dpd => "dpd",
            CustomerField::Notes => "keterangan",
        }
    }

    fn all() -> &'static [CustomerField] {
        &[
            CustomerField::Id,
            CustomerField::Name,
            CustomerField::Phone,
            CustomerField::Flag,
            CustomerField::Status,
            CustomerField::DelinquencyTag,
            CustomerField::DueDate,
            CustomerField::PayoffDate,
            CustomerField::PrsDate,
            CustomerField::Outstanding,
            CustomerField::Plafond,
            CustomerField::Savings,
            CustomerField::Officer,
            CustomerField::Sentra,
            CustomerField::Dpd,
            CustomerField::Notes,
        ]
    }

    fn default_keywords(&self) -> &'static [&'static str] {
        match self {
            CustomerField::Id => &["id nasabah", "no anggota", "id"],
            CustomerField::Name => &["nama nasabah", "nama"],
            CustomerField::Phone => &["no hp", "no. hp", "telepon", "whatsapp", "hp"],
            CustomerField::Flag => &["flag nasabah", "flag"],
            CustomerField::Status => &["status pembiayaan", "status"],
            CustomerField::DelinquencyTag => &["flag menunggak", "menunggak"],
            CustomerField::DueDate => &["tgl jatuh tempo", "jatuh tempo"],
            CustomerField::PayoffDate => &["tgl lunas", "tanggal lunas"],
            CustomerField::PrsDate => &["tgl prs", "jadwal prs", "prs"],
            CustomerField::Outstanding => &["outstanding", "baki debet", "sisa pinjaman"],
            CustomerField::Plafond => &["plafon", "plafond", "limit"],
            CustomerField::Savings => &["saldo tabungan", "tabungan"],
            CustomerField::Officer => &["nama co", "petugas", "co"],
            CustomerField::Sentra => &["sentra", "kelompok", "cabang"],
            CustomerField::Dpd => &["dpd", "hari tunggakan"],
            CustomerField::Notes => &["keterangan", "catatan", "notes"],
        }
    }
}

/// Per-tenant keyword overrides, stored on the backend as a collection of
/// (field key, keyword list) pairs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMapOverrides {
    #[serde(default)]
    pub keywords: HashMap<String, Vec<String>>,
}

/// Resolved mapping of logical fields to keyword lists.
#[derive(Debug, Clone)]
pub struct FieldMapping {
    keywords: HashMap<CustomerField, Vec<String>>,
}

impl Default for FieldMapping {
    fn default() -> Self {
        let keywords = CustomerField::all()
            .iter()
            .map(|f| {
                (
                    *f,
                    f.default_keywords().iter().map(|k| k.to_string()).collect(),
                )
            })
            .collect();
        Self { keywords }
    }
}

impl FieldMapping {
    /// Builds the effective mapping: defaults, with any override replacing
    /// the whole keyword list for its field.
    pub fn with_overrides(overrides: &FieldMapOverrides) -> Self {
        let mut mapping = Self::default();
        for field in CustomerField::all() {
            if let Some(list) = overrides.keywords.get(field.key()) {
                if !list.is_empty() {
                    mapping
                        .keywords
                        .insert(*field, list.iter().map(|k| k.to_lowercase()).collect());
                }
            }
        }
        mapping
    }

    /// Resolves each logical field to a column index.
    ///
    /// The first header containing any of the field's keywords wins;
    /// keywords are tried in list order so the most specific comes first.
    /// A field with no matching header is simply absent — missing columns
    /// must never crash ingestion.
    pub fn resolve(&self, headers: &[String]) -> HashMap<CustomerField, usize> {
        let lowered: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
        let mut resolved = HashMap::new();
        for (field, keywords) in &self.keywords {
            'field: for keyword in keywords {
                for (index, header) in lowered.iter().enumerate() {
                    if !header.is_empty() && header.contains(keyword.as_str()) {
                        resolved.insert(*field, index);
                        break 'field;
                    }
                }
            }
        }
        resolved
    }
}
