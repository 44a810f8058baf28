use serde::{Deserialize, Serialize};

/// A technician record as served by the `tecnicos` collection endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technician {
    pub id: u64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "especialidad")]
    pub specialty: String,
    /// Chilean RUT.
    #[serde(rename = "rut")]
    pub national_id: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "disponible", default = "default_available")]
    pub available: bool,
    /// "lat,long" as free text.
    #[serde(
        rename = "ubicacion_actual",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub current_location: Option<String>,
}

fn default_available() -> bool {
    true
}

impl Technician {
    pub fn availability(&self) -> Availability {
        Availability::from(self.available)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    Busy,
}

impl Availability {
    pub fn label(&self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::Busy => "Busy",
        }
    }
}

impl From<bool> for Availability {
    fn from(available: bool) -> Self {
        if available {
            Availability::Available
        } else {
            Availability::Busy
        }
    }
}

/// Query key for one read of the collection. Equal keys mean the same read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TechnicianQuery {
    pub available: Option<bool>,
    pub specialty: Option<String>,
}

impl TechnicianQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn available(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }

    pub fn specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = Some(specialty.into());
        self
    }

    /// Query-string pairs understood by the collection endpoint.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(available) = self.available {
            params.push(("disponible", available.to_string()));
        }
        if let Some(specialty) = &self.specialty {
            params.push(("especialidad", specialty.clone()));
        }
        params
    }
}
