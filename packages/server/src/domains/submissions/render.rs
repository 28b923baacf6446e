//! HTML notification rendering.
//!
//! One template, parameterized by submission variant: every email is a
//! titled document made of toned sections, so the four forms share
//! layout, escaping and formatting instead of four string builders.

use chrono::{DateTime, Locale, NaiveDate, Utc};

use super::{event_label, Submission};

/// Subject and body for one notification email.
#[derive(Debug, Clone)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
}

enum Tone {
    /// Neutral facts (grey).
    Info,
    /// Quoted user content (blue).
    Quote,
    /// Optional free-text from the submitter (yellow).
    Note,
    /// Follow-up the family must do (green).
    Action,
}

struct Section {
    heading: String,
    body: String,
    tone: Tone,
}

impl Section {
    fn new(tone: Tone, heading: &str, body: String) -> Self {
        Self {
            heading: heading.to_string(),
            body,
            tone,
        }
    }
}

/// Render the notification email for a validated submission.
pub fn render_submission(submission: &Submission) -> RenderedEmail {
    match submission {
        Submission::Attendance(c) => {
            let mut info = String::new();
            info.push_str(&row("Nom", &escape(&c.nom)));
            info.push_str(&row("Téléphone", &escape(&c.telephone)));
            if let Some(email) = &c.email {
                info.push_str(&row("Email", &escape(email)));
            }
            info.push_str(&row("Nombre de personnes", &c.personnes.to_string()));
            info.push_str(&row(
                "Besoin d'hébergement",
                if c.hebergement { "✅ Oui" } else { "❌ Non" },
            ));

            let events = format!(
                "<ul>{}</ul>",
                c.evenements
                    .iter()
                    .map(|code| format!("<li>{}</li>", escape(event_label(code))))
                    .collect::<String>()
            );

            let mut sections = vec![
                Section::new(Tone::Info, "Informations du participant:", info),
                Section::new(Tone::Quote, "Événements confirmés à Abengourou:", events),
            ];
            if let Some(message) = &c.message {
                sections.push(Section::new(
                    Tone::Note,
                    "Message supplémentaire:",
                    paragraph(message),
                ));
            }

            RenderedEmail {
                subject: "Nouvelle confirmation de présence - Obsèques".to_string(),
                html: wrap("📝 Nouvelle confirmation de présence", &sections),
            }
        }

        Submission::Hotel(r) => {
            let mut info = String::new();
            info.push_str(&row("Hôtel demandé", &escape(&r.hotel)));
            info.push_str(&row("Client", &escape(&r.nom)));
            info.push_str(&row("Téléphone", &escape(&r.telephone)));
            if let Some(email) = &r.email {
                info.push_str(&row("Email", &escape(email)));
            }
            info.push_str(&row(
                "Dates",
                &format!(
                    "Du {} au {}",
                    format_date_fr(r.arrivee),
                    format_date_fr(r.depart)
                ),
            ));
            info.push_str(&row("Nombre de chambres", &r.chambres.to_string()));

            let mut sections = vec![Section::new(
                Tone::Info,
                "Informations de réservation:",
                info,
            )];
            if let Some(message) = &r.message {
                sections.push(Section::new(
                    Tone::Note,
                    "Message du client:",
                    paragraph(message),
                ));
            }
            sections.push(Section::new(
                Tone::Action,
                "📞 Action requise:",
                "<p>Contacter le client pour confirmer la disponibilité et les \
                 modalités de paiement.</p>"
                    .to_string(),
            ));

            RenderedEmail {
                subject: "Nouvelle demande de réservation - Obsèques".to_string(),
                html: wrap("🏨 Nouvelle demande de réservation", &sections),
            }
        }

        Submission::Merchandise(o) => {
            let mut info = String::new();
            info.push_str(&row("Client", &escape(&o.nom)));
            info.push_str(&row("Téléphone", &escape(&o.telephone)));
            if let Some(email) = &o.email {
                info.push_str(&row("Email", &escape(email)));
            }
            info.push_str(&row("Quantité", &o.quantite.to_string()));
            info.push_str(&row("Taille", o.taille_label()));
            info.push_str(&row(
                "Prix unitaire",
                &format_fcfa(u64::from(super::PAGNE_UNIT_PRICE)),
            ));
            info.push_str(&row(
                "Montant total",
                &format!(
                    "<strong style=\"font-size: 1.2em;\">{}</strong>",
                    format_fcfa(o.montant())
                ),
            ));

            let sections = vec![
                Section::new(Tone::Info, "Informations de commande:", info),
                Section::new(
                    Tone::Action,
                    "📞 Action requise:",
                    "<p>Contacter le client pour confirmer la commande et organiser \
                     la livraison.</p>"
                        .to_string(),
                ),
            ];

            RenderedEmail {
                subject: "Nouvelle commande de pagne - Obsèques".to_string(),
                html: wrap("🛍️ Nouvelle commande de pagne", &sections),
            }
        }

        Submission::Condolence(m) => {
            let mut info = String::new();
            info.push_str(&row("Nom", &escape(&m.nom)));
            if let Some(relation) = &m.relation {
                info.push_str(&row("Relation", &escape(relation)));
            }
            info.push_str(&row("Date", &format_datetime_fr(Utc::now())));

            let quote = format!(
                "<p style=\"font-style: italic;\">&quot;{}&quot;</p>",
                escape(&m.message)
            );

            let sections = vec![
                Section::new(Tone::Info, "De la part de:", info),
                Section::new(Tone::Quote, "Message:", quote),
            ];

            RenderedEmail {
                subject: "Nouveau message de condoléances - Obsèques".to_string(),
                html: wrap("💌 Nouveau message de condoléances", &sections),
            }
        }
    }
}

// =============================================================================
// Layout
// =============================================================================

fn wrap(title: &str, sections: &[Section]) -> String {
    let mut html = String::new();
    html.push_str(
        "<div style=\"font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;\">",
    );
    html.push_str(&format!(
        "<h2 style=\"color: #0a1931; border-bottom: 2px solid #0a1931; \
         padding-bottom: 10px;\">{title}</h2>"
    ));

    for section in sections {
        let (background, heading_color) = match section.tone {
            Tone::Info => ("#f8f9fa", "#0a1931"),
            Tone::Quote => ("#ebf8ff", "#0a1931"),
            Tone::Note => ("#fff3cd", "#856404"),
            Tone::Action => ("#d4edda", "#155724"),
        };
        html.push_str(&format!(
            "<div style=\"background: {background}; padding: 20px; \
             border-radius: 5px; margin: 20px 0;\">\
             <h3 style=\"color: {heading_color}; margin-top: 0;\">{}</h3>{}</div>",
            section.heading, section.body
        ));
    }

    html.push_str(
        "<div style=\"margin-top: 30px; padding-top: 20px; border-top: 1px solid #dee2e6;\">\
         <p style=\"color: #6c757d; font-size: 12px;\">\
         📧 Envoyé automatiquement depuis le site des obsèques</p></div>",
    );
    html.push_str("</div>");
    html
}

fn row(label: &str, value_html: &str) -> String {
    format!("<p><strong>{label}:</strong> {value_html}</p>")
}

fn paragraph(text: &str) -> String {
    format!("<p>{}</p>", escape(text))
}

/// Minimal HTML escaping for user-entered text interpolated into the body.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// =============================================================================
// Formatting
// =============================================================================

/// Amount with French thousands separators: `20100` becomes `20 100 FCFA`.
pub fn format_fcfa(amount: u64) -> String {
    let digits = amount.to_string();
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 5);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(*b as char);
    }
    out.push_str(" FCFA");
    out
}

fn format_date_fr(date: NaiveDate) -> String {
    date.format_localized("%d %B %Y", Locale::fr_FR).to_string()
}

fn format_datetime_fr(datetime: DateTime<Utc>) -> String {
    datetime
        .format_localized("%d %B %Y à %H:%M", Locale::fr_FR)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::submissions::{
        AttendanceConfirmation, CondolenceMessage, HotelReservation, MerchandiseOrder,
    };

    #[test]
    fn fcfa_amounts_are_grouped_by_thousands() {
        assert_eq!(format_fcfa(6700), "6 700 FCFA");
        assert_eq!(format_fcfa(20100), "20 100 FCFA");
        assert_eq!(format_fcfa(500), "500 FCFA");
        assert_eq!(format_fcfa(1_340_000), "1 340 000 FCFA");
    }

    #[test]
    fn attendance_email_lists_every_selected_event_label() {
        let rendered = render_submission(&Submission::Attendance(AttendanceConfirmation {
            nom: "Awa Koné".to_string(),
            telephone: "+225 07 00 00 01".to_string(),
            email: None,
            evenements: vec![
                "leve-corps".to_string(),
                "messe-action-grace".to_string(),
                "cortege-special".to_string(),
            ],
            personnes: 3,
            hebergement: true,
            message: None,
        }));

        assert!(rendered.html.contains("Levé de corps (17 Oct)"));
        assert!(rendered.html.contains("Messe d&#39;action de grâce (18 Oct)"));
        // Unknown codes render verbatim.
        assert!(rendered.html.contains("cortege-special"));
        assert!(rendered.html.contains("✅ Oui"));
    }

    #[test]
    fn hotel_email_formats_dates_in_french() {
        let rendered = render_submission(&Submission::Hotel(HotelReservation {
            nom: "Jean Kouassi".to_string(),
            telephone: "+225 05 00 00 02".to_string(),
            email: Some("jean@example.org".to_string()),
            arrivee: chrono::NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
            depart: chrono::NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            chambres: 2,
            message: Some("Chambres côte à côte si possible".to_string()),
            hotel: "Hôtel du Centre".to_string(),
        }));

        assert!(rendered.html.contains("17 octobre 2026"));
        assert!(rendered.html.contains("19 octobre 2026"));
        assert!(rendered.html.contains("Hôtel du Centre"));
        assert!(rendered.html.contains("Message du client:"));
    }

    #[test]
    fn hotel_email_omits_absent_optional_sections() {
        let rendered = render_submission(&Submission::Hotel(HotelReservation {
            nom: "Jean Kouassi".to_string(),
            telephone: "+225 05 00 00 02".to_string(),
            email: None,
            arrivee: chrono::NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
            depart: chrono::NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
            chambres: 1,
            message: None,
            hotel: "Hôtel du Centre".to_string(),
        }));

        assert!(!rendered.html.contains("Message du client:"));
        assert!(!rendered.html.contains("Email"));
    }

    #[test]
    fn merchandise_email_carries_unit_price_and_total() {
        let rendered = render_submission(&Submission::Merchandise(MerchandiseOrder {
            nom: "Mariam Touré".to_string(),
            telephone: "+225 01 00 00 03".to_string(),
            email: None,
            quantite: 3,
            taille: "grande".to_string(),
        }));

        assert!(rendered.html.contains("6 700 FCFA"));
        assert!(rendered.html.contains("20 100 FCFA"));
        assert!(rendered.html.contains("Grande taille"));
    }

    #[test]
    fn user_content_is_html_escaped() {
        let rendered = render_submission(&Submission::Condolence(CondolenceMessage {
            nom: "<script>alert(1)</script>".to_string(),
            relation: None,
            message: "a < b & c".to_string(),
        }));

        assert!(!rendered.html.contains("<script>"));
        assert!(rendered.html.contains("&lt;script&gt;"));
        assert!(rendered.html.contains("a &lt; b &amp; c"));
    }
}
