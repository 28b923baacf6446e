use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Price of one pagne, in FCFA.
pub const PAGNE_UNIT_PRICE: u32 = 6700;

/// Codes the front-end sends for each memorial event, with display labels.
pub const EVENT_LABELS: &[(&str, &str)] = &[
    ("leve-corps", "Levé de corps (17 Oct)"),
    ("veillee-traditionnelle", "Veillée traditionnelle (17 Oct)"),
    ("absolut-inhumation", "Absolut et Inhumation (18 Oct)"),
    ("messe-action-grace", "Messe d'action de grâce (18 Oct)"),
];

/// Display label for an event code. Unknown codes pass through verbatim.
pub fn event_label(code: &str) -> &str {
    EVENT_LABELS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
        .unwrap_or(code)
}

/// Missing or invalid required field. The message is user-facing French.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// A validated submission, ready for rendering and relay.
#[derive(Debug, Clone)]
pub enum Submission {
    Attendance(AttendanceConfirmation),
    Hotel(HotelReservation),
    Merchandise(MerchandiseOrder),
    Condolence(CondolenceMessage),
}

// =============================================================================
// Wire payloads
//
// Everything is defaulted so a missing field reaches `validate()` instead of
// bouncing off the deserializer with a non-uniform error payload. Counts come
// in as numbers or strings depending on which form produced them.
// =============================================================================

fn flexible_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Text(String),
    }

    // Out-of-range values collapse to 0 and fail required-count validation.
    Ok(match Raw::deserialize(deserializer)? {
        Raw::Num(n) => u32::try_from(n).unwrap_or(0),
        Raw::Text(s) => s.trim().parse().unwrap_or(0),
    })
}

fn default_one() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize)]
pub struct PresenceRequest {
    #[serde(default)]
    pub nom: String,
    #[serde(default)]
    pub telephone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub evenements: Vec<String>,
    #[serde(
        rename = "nombrePersonnes",
        default = "default_one",
        deserialize_with = "flexible_count"
    )]
    pub nombre_personnes: u32,
    #[serde(rename = "besoinHebergement", default)]
    pub besoin_hebergement: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HotelReservationRequest {
    #[serde(default)]
    pub nom: String,
    #[serde(default)]
    pub telephone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "dateArrivee", default)]
    pub date_arrivee: String,
    #[serde(rename = "dateDepart", default)]
    pub date_depart: String,
    #[serde(
        rename = "nombreChambres",
        default = "default_one",
        deserialize_with = "flexible_count"
    )]
    pub nombre_chambres: u32,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub hotel: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PagneRequest {
    #[serde(default)]
    pub nom: String,
    #[serde(default)]
    pub telephone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "flexible_count")]
    pub quantite: u32,
    #[serde(default)]
    pub taille: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CondoleanceRequest {
    #[serde(default)]
    pub nom: String,
    #[serde(default)]
    pub relation: Option<String>,
    #[serde(default)]
    pub message: String,
}

// =============================================================================
// Validated submissions
// =============================================================================

#[derive(Debug, Clone)]
pub struct AttendanceConfirmation {
    pub nom: String,
    pub telephone: String,
    pub email: Option<String>,
    /// Selected event codes, never empty.
    pub evenements: Vec<String>,
    pub personnes: u32,
    pub hebergement: bool,
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HotelReservation {
    pub nom: String,
    pub telephone: String,
    pub email: Option<String>,
    pub arrivee: NaiveDate,
    /// Always >= `arrivee`.
    pub depart: NaiveDate,
    pub chambres: u32,
    pub message: Option<String>,
    pub hotel: String,
}

#[derive(Debug, Clone)]
pub struct MerchandiseOrder {
    pub nom: String,
    pub telephone: String,
    pub email: Option<String>,
    pub quantite: u32,
    pub taille: String,
}

#[derive(Debug, Clone)]
pub struct CondolenceMessage {
    pub nom: String,
    pub relation: Option<String>,
    pub message: String,
}

impl MerchandiseOrder {
    /// Total amount in FCFA: quantity times the fixed unit price.
    pub fn montant(&self) -> u64 {
        u64::from(self.quantite) * u64::from(PAGNE_UNIT_PRICE)
    }

    pub fn taille_label(&self) -> &'static str {
        if self.taille == "grande" {
            "Grande taille"
        } else {
            "Standard"
        }
    }
}

// =============================================================================
// Validation
// =============================================================================

fn require(value: String, message: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::new(message))
    } else {
        Ok(trimmed.to_string())
    }
}

fn clean_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_date(value: &str, message: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::new(message))
}

impl PresenceRequest {
    pub fn validate(self) -> Result<AttendanceConfirmation, ValidationError> {
        let nom = require(self.nom, "Le nom est requis")?;
        let telephone = require(self.telephone, "Le téléphone est requis")?;

        let evenements: Vec<String> = self
            .evenements
            .into_iter()
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();
        if evenements.is_empty() {
            return Err(ValidationError::new(
                "Veuillez sélectionner au moins un événement",
            ));
        }

        Ok(AttendanceConfirmation {
            nom,
            telephone,
            email: clean_optional(self.email),
            evenements,
            personnes: self.nombre_personnes.max(1),
            hebergement: self.besoin_hebergement.as_deref() == Some("oui"),
            message: clean_optional(self.message),
        })
    }
}

impl HotelReservationRequest {
    pub fn validate(self) -> Result<HotelReservation, ValidationError> {
        let nom = require(self.nom, "Le nom est requis")?;
        let telephone = require(self.telephone, "Le téléphone est requis")?;
        let hotel = require(self.hotel, "L'hôtel est requis")?;

        let arrivee = parse_date(&self.date_arrivee, "Date d'arrivée invalide")?;
        let depart = parse_date(&self.date_depart, "Date de départ invalide")?;
        if depart < arrivee {
            return Err(ValidationError::new(
                "La date de départ doit être postérieure ou égale à la date d'arrivée",
            ));
        }
        if self.nombre_chambres < 1 {
            return Err(ValidationError::new(
                "Le nombre de chambres doit être d'au moins 1",
            ));
        }

        Ok(HotelReservation {
            nom,
            telephone,
            email: clean_optional(self.email),
            arrivee,
            depart,
            chambres: self.nombre_chambres,
            message: clean_optional(self.message),
            hotel,
        })
    }
}

impl PagneRequest {
    pub fn validate(self) -> Result<MerchandiseOrder, ValidationError> {
        let nom = require(self.nom, "Le nom est requis")?;
        let telephone = require(self.telephone, "Le téléphone est requis")?;
        if self.quantite < 1 {
            return Err(ValidationError::new("Quantité invalide"));
        }

        let taille = self.taille.trim().to_string();
        Ok(MerchandiseOrder {
            nom,
            telephone,
            email: clean_optional(self.email),
            quantite: self.quantite,
            taille: if taille.is_empty() {
                "standard".to_string()
            } else {
                taille
            },
        })
    }
}

impl CondoleanceRequest {
    pub fn validate(self) -> Result<CondolenceMessage, ValidationError> {
        let nom = require(self.nom, "Le nom est requis")?;
        let message = require(
            self.message,
            "Veuillez écrire un message de condoléances",
        )?;

        Ok(CondolenceMessage {
            nom,
            relation: clean_optional(self.relation),
            message,
        })
    }
}
