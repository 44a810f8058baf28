//! Turns a [`ListState`] into a [`Frame`] and a frame into terminal text,
//! JSON or CSV.

use crate::core::view::ListState;
use crate::core::{Availability, Technician};
use crate::utils::error::{BoardError, Result};
use owo_colors::OwoColorize;
use std::fmt::Write as _;
use std::str::FromStr;

pub const LOADING_MESSAGE: &str = "Loading data...";
pub const LIST_TITLE: &str = "Technical Staff";
pub const EMPTY_MESSAGE: &str = "No technicians registered.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    Available,
    Busy,
}

impl From<Availability> for CardStyle {
    fn from(availability: Availability) -> Self {
        match availability {
            Availability::Available => CardStyle::Available,
            Availability::Busy => CardStyle::Busy,
        }
    }
}

/// One rendered technician, keyed by the technician id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub key: u64,
    pub name: String,
    pub specialty: String,
    pub national_id: String,
    pub phone: String,
    pub location: Option<String>,
    pub availability: Availability,
    pub style: CardStyle,
}

impl Card {
    pub fn label(&self) -> &'static str {
        self.availability.label()
    }
}

impl From<&Technician> for Card {
    fn from(tech: &Technician) -> Self {
        let availability = tech.availability();
        Self {
            key: tech.id,
            name: tech.name.clone(),
            specialty: tech.specialty.clone(),
            national_id: tech.national_id.clone(),
            phone: tech.phone.clone(),
            location: tech.current_location.clone(),
            availability,
            style: CardStyle::from(availability),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Loading {
        message: String,
    },
    Error {
        message: String,
    },
    List {
        title: String,
        cards: Vec<Card>,
        empty_message: Option<String>,
    },
}

impl Frame {
    pub fn from_state(state: &ListState) -> Self {
        match state {
            ListState::Loading => Frame::Loading {
                message: LOADING_MESSAGE.to_string(),
            },
            ListState::Failed(message) => Frame::Error {
                message: message.clone(),
            },
            ListState::Loaded(technicians) => {
                let cards: Vec<Card> = technicians.iter().map(Card::from).collect();
                let empty_message = cards.is_empty().then(|| EMPTY_MESSAGE.to_string());
                Frame::List {
                    title: LIST_TITLE.to_string(),
                    cards,
                    empty_message,
                }
            }
        }
    }

    pub fn cards(&self) -> &[Card] {
        match self {
            Frame::List { cards, .. } => cards,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["text", "json", "csv"];
}

impl FromStr for OutputFormat {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(BoardError::InvalidConfigValue {
                field: "format".to_string(),
                value: other.to_string(),
                reason: format!("Expected one of: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

/// Renders the view state. JSON and CSV only apply to the loaded branch.
pub fn render_state(state: &ListState, format: OutputFormat, color: bool) -> Result<String> {
    match (state, format) {
        (ListState::Loaded(technicians), OutputFormat::Json) => render_json(technicians),
        (ListState::Loaded(technicians), OutputFormat::Csv) => render_csv(technicians),
        _ => Ok(render_text(&Frame::from_state(state), color)),
    }
}

pub fn render_text(frame: &Frame, color: bool) -> String {
    let mut out = String::new();
    match frame {
        Frame::Loading { message } => {
            let line = format!("… {}", message);
            if color {
                let _ = writeln!(out, "{}", line.blue());
            } else {
                let _ = writeln!(out, "{}", line);
            }
        }
        Frame::Error { message } => {
            let line = format!("✖ Error: {}", message);
            if color {
                let _ = writeln!(out, "{}", line.red());
            } else {
                let _ = writeln!(out, "{}", line);
            }
        }
        Frame::List {
            title,
            cards,
            empty_message,
        } => {
            if color {
                let _ = writeln!(out, "{}", title.bold());
            } else {
                let _ = writeln!(out, "{}", title);
            }
            let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));

            for card in cards {
                out.push('\n');
                write_card(&mut out, card, color);
            }

            if let Some(message) = empty_message {
                out.push('\n');
                if color {
                    let _ = writeln!(out, "{}", message.dimmed());
                } else {
                    let _ = writeln!(out, "{}", message);
                }
            }
        }
    }
    out
}

fn write_card(out: &mut String, card: &Card, color: bool) {
    let badge = format!("[{}]", card.label());
    let mut lines = vec![
        format!("Specialty: {}", card.specialty),
        format!("RUT: {}", card.national_id),
        format!("Phone: {}", card.phone),
    ];
    if let Some(location) = &card.location {
        lines.push(format!("Location: {}", location));
    }

    if !color {
        let _ = writeln!(out, "#{} {} {}", card.key, card.name, badge);
        for line in lines {
            let _ = writeln!(out, "  {}", line);
        }
        return;
    }

    match card.style {
        CardStyle::Available => {
            let _ = writeln!(
                out,
                "#{} {} {}",
                card.key,
                card.name.bold(),
                badge.green()
            );
            for line in lines {
                let _ = writeln!(out, "  {}", line);
            }
        }
        CardStyle::Busy => {
            let _ = writeln!(out, "#{} {} {}", card.key, card.name.dimmed(), badge.red());
            for line in lines {
                let _ = writeln!(out, "  {}", line.dimmed());
            }
        }
    }
}

pub fn render_json(technicians: &[Technician]) -> Result<String> {
    serde_json::to_string_pretty(technicians).map_err(|e| BoardError::Render {
        message: e.to_string(),
    })
}

pub fn render_csv(technicians: &[Technician]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["id", "name", "specialty", "rut", "phone", "available"])?;
    for tech in technicians {
        writer.write_record([
            tech.id.to_string(),
            tech.name.clone(),
            tech.specialty.clone(),
            tech.national_id.clone(),
            tech.phone.clone(),
            tech.available.to_string(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| BoardError::Render {
        message: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| BoardError::Render {
        message: e.to_string(),
    })
}
