use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Tax rate applied to every document, in percent. Fixed by design; there is
/// no per-document override.
pub const TVA_RATE: f64 = 20.0;

/// The closed set of document types the company issues. Serialized with the
/// French tags the persisted schema has always used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocType {
    Devis,
    Facture,
    Contrat,
    Garantie,
    Rapport,
    Recu,
}

impl DocType {
    pub const ALL: [DocType; 6] = [
        DocType::Devis,
        DocType::Facture,
        DocType::Contrat,
        DocType::Garantie,
        DocType::Rapport,
        DocType::Recu,
    ];

    /// The serialized tag. Document number prefixes are derived from it.
    pub fn tag(&self) -> &'static str {
        match self {
            DocType::Devis => "DEVIS",
            DocType::Facture => "FACTURE",
            DocType::Contrat => "CONTRAT",
            DocType::Garantie => "GARANTIE",
            DocType::Rapport => "RAPPORT",
            DocType::Recu => "RECU",
        }
    }

    /// Bilingual heading used at the top of the printed document.
    pub fn print_title(&self) -> &'static str {
        match self {
            DocType::Devis => "عرض ثمن - DEVIS",
            DocType::Facture => "فاتورة - FACTURE",
            DocType::Contrat => "عقد صيانة - CONTRAT DE MAINTENANCE",
            DocType::Garantie => "شهادة ضمان - CERTIFICAT DE GARANTIE",
            DocType::Rapport => "تقرير تدخل - RAPPORT D'INTERVENTION",
            DocType::Recu => "وصل أداء - REÇU DE PAIEMENT",
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Document lifecycle state. Any state is reachable from any other; the
/// engine does not enforce a transition graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocStatus {
    Draft,
    Sent,
    Paid,
    Cancelled,
}

/// One entry of the client directory. Fiscal identifiers are carried as
/// opaque strings; no validation beyond presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub ice: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub created_at: DateTime<Utc>,
}

/// One priced row of a document. `total` is derived and recomputed whenever
/// quantity or unit price changes; it is never set independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: Uuid,
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total: f64,
}

impl LineItem {
    /// A fresh empty row as the entry form starts it: quantity 1, price 0.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            description: String::new(),
            quantity: 1.0,
            unit_price: 0.0,
            total: 0.0,
        }
    }

    pub fn with_values(description: &str, quantity: f64, unit_price: f64) -> Self {
        let mut item = Self {
            id: Uuid::new_v4(),
            description: description.to_string(),
            quantity,
            unit_price,
            total: 0.0,
        };
        item.recompute_total();
        item
    }

    /// Recompute the derived total. Non-finite quantity or price is coerced
    /// to zero in place: JSON has no representation for NaN or infinity, so
    /// letting one through would corrupt the persisted aggregate.
    pub fn recompute_total(&mut self) {
        self.quantity = finite_or_zero(self.quantity);
        self.unit_price = finite_or_zero(self.unit_price);
        self.total = self.quantity * self.unit_price;
    }
}

impl Default for LineItem {
    fn default() -> Self {
        Self::new()
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

/// The type tag of a document together with the one detail field that type
/// actually uses. Quotes, invoices, contracts and receipts carry free-form
/// notes; warranty certificates carry the warranty period; intervention
/// reports carry the technical details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE", rename_all_fields = "camelCase")]
pub enum DocBody {
    Devis { notes: String },
    Facture { notes: String },
    Contrat { notes: String },
    Garantie { warranty_period: String },
    Rapport { intervention_details: String },
    Recu { notes: String },
}

impl DocBody {
    /// An empty body of the given type, as a new entry form starts.
    pub fn empty(doc_type: DocType) -> Self {
        match doc_type {
            DocType::Devis => DocBody::Devis {
                notes: String::new(),
            },
            DocType::Facture => DocBody::Facture {
                notes: String::new(),
            },
            DocType::Contrat => DocBody::Contrat {
                notes: String::new(),
            },
            DocType::Garantie => DocBody::Garantie {
                warranty_period: String::new(),
            },
            DocType::Rapport => DocBody::Rapport {
                intervention_details: String::new(),
            },
            DocType::Recu => DocBody::Recu {
                notes: String::new(),
            },
        }
    }

    pub fn doc_type(&self) -> DocType {
        match self {
            DocBody::Devis { .. } => DocType::Devis,
            DocBody::Facture { .. } => DocType::Facture,
            DocBody::Contrat { .. } => DocType::Contrat,
            DocBody::Garantie { .. } => DocType::Garantie,
            DocBody::Rapport { .. } => DocType::Rapport,
            DocBody::Recu { .. } => DocType::Recu,
        }
    }

    pub fn notes(&self) -> Option<&str> {
        match self {
            DocBody::Devis { notes }
            | DocBody::Facture { notes }
            | DocBody::Contrat { notes }
            | DocBody::Recu { notes } => Some(notes),
            _ => None,
        }
    }

    pub fn warranty_period(&self) -> Option<&str> {
        match self {
            DocBody::Garantie { warranty_period } => Some(warranty_period),
            _ => None,
        }
    }

    pub fn intervention_details(&self) -> Option<&str> {
        match self {
            DocBody::Rapport {
                intervention_details,
            } => Some(intervention_details),
            _ => None,
        }
    }
}

/// A commercial document. `number` and `date` are assigned at creation and
/// never change afterwards; `subtotal` and `total` are derived from the
/// items and recomputed on every edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: Uuid,
    /// Weak reference: the client may have been deleted since, in which case
    /// the cascade removes this document in the same operation.
    pub client_id: Uuid,
    pub number: String,
    pub date: NaiveDate,
    pub items: Vec<LineItem>,
    pub subtotal: f64,
    /// Tax rate in percent. Always [`TVA_RATE`].
    pub tva: f64,
    pub total: f64,
    pub status: DocStatus,
    #[serde(flatten)]
    pub body: DocBody,
}

impl Document {
    pub fn doc_type(&self) -> DocType {
        self.body.doc_type()
    }

    /// Recompute every derived amount from the line items.
    pub fn recompute_totals(&mut self) {
        for item in &mut self.items {
            item.recompute_total();
        }
        self.subtotal = self.items.iter().map(|i| i.total).sum();
        self.total = self.subtotal * (1.0 + self.tva / 100.0);
    }
}

/// Process-wide company record printed on every document. Edited wholesale
/// by the settings screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySettings {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    /// Commercial registry number.
    pub rc: String,
    /// Tax identifier. The persisted key is `if`, which is reserved in Rust.
    #[serde(rename = "if")]
    pub if_number: String,
    /// Common enterprise identifier.
    pub ice: String,
    pub bank_info: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stamp_url: Option<String>,
}

impl Default for CompanySettings {
    fn default() -> Self {
        Self {
            name: "Electro GIM Services".to_string(),
            address: "Wifak 3 rue 3 N-143, Casablanca".to_string(),
            phone: "+212 770 501 853".to_string(),
            email: "contact@electrogim.ma".to_string(),
            rc: "123456".to_string(),
            if_number: "7891011".to_string(),
            ice: "001552233445566".to_string(),
            bank_info: "RIB: 007 780 0001234567890123 45 (Attijariwafa Bank)".to_string(),
            logo_url: None,
            stamp_url: None,
        }
    }
}

/// The aggregate root and unit of persistence. Every mutation replaces the
/// whole value; every save writes the whole value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub clients: Vec<Client>,
    pub documents: Vec<Document>,
    pub settings: CompanySettings,
}

impl AppState {
    pub fn client(&self, id: Uuid) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    pub fn document(&self, id: Uuid) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    /// Live count of documents of one type. Numbering derives sequence
    /// numbers from this count rather than a stored counter.
    pub fn count_of_type(&self, doc_type: DocType) -> usize {
        self.documents
            .iter()
            .filter(|d| d.doc_type() == doc_type)
            .count()
    }
}
