//! Creative content requests.
//!
//! The image proxy accepts a small set of creation types. They are
//! modeled as an exhaustive enum so every dispatch site matches all
//! variants instead of looking features up by string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of AI-generated creative content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreativeKind {
    /// Virtual photo with a character from the show.
    Foto,
    /// Personalized poster in the show's title style.
    Poster,
    /// Printable themed invitation card.
    Tarjeta,
}

impl CreativeKind {
    pub const ALL: [CreativeKind; 3] =
        [CreativeKind::Foto, CreativeKind::Poster, CreativeKind::Tarjeta];

    /// Wire discriminator sent to the image proxy.
    pub fn as_str(&self) -> &'static str {
        match self {
            CreativeKind::Foto => "foto",
            CreativeKind::Poster => "poster",
            CreativeKind::Tarjeta => "tarjeta",
        }
    }

    /// User-facing title, in the site's language.
    pub fn title(&self) -> &'static str {
        match self {
            CreativeKind::Foto => "Fotos con Personajes",
            CreativeKind::Poster => "Generador de Posters",
            CreativeKind::Tarjeta => "Tarjetas Imprimibles",
        }
    }
}

impl fmt::Display for CreativeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CreativeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "foto" => Ok(CreativeKind::Foto),
            "poster" => Ok(CreativeKind::Poster),
            "tarjeta" => Ok(CreativeKind::Tarjeta),
            other => Err(format!("unknown creative kind: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_str() {
        for kind in CreativeKind::ALL {
            assert_eq!(kind.as_str().parse::<CreativeKind>().unwrap(), kind);
        }
    }

    #[test]
    fn serializes_lowercase_discriminator() {
        let json = serde_json::to_value(CreativeKind::Tarjeta).unwrap();
        assert_eq!(json, "tarjeta");
    }

    #[test]
    fn rejects_unknown_kind() {
        assert!("demogorgon".parse::<CreativeKind>().is_err());
    }
}
