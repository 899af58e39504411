use serde::{Deserialize, Serialize};

use crate::{StatusMessage, ValidationError};

/// Language for every user-facing string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Spanish,
}

impl Locale {
    pub fn unknown(self) -> &'static str {
        match self {
            Locale::English => "Unknown",
            Locale::Spanish => "Desconocido",
        }
    }

    pub fn author_label(self) -> &'static str {
        match self {
            Locale::English => "Author",
            Locale::Spanish => "Autor",
        }
    }

    pub fn year_label(self) -> &'static str {
        match self {
            Locale::English => "Year",
            Locale::Spanish => "Año",
        }
    }

    pub fn page_label(self) -> &'static str {
        match self {
            Locale::English => "Page",
            Locale::Spanish => "Página",
        }
    }

    pub fn cover_alt(self, title: &str) -> String {
        match self {
            Locale::English => format!("Cover of {title}"),
            Locale::Spanish => format!("Portada de {title}"),
        }
    }

    pub fn message(self, message: &StatusMessage) -> String {
        match (self, message) {
            (Locale::English, StatusMessage::Invalid(ValidationError::EmptyQuery)) => {
                "Please enter a search term.".to_string()
            }
            (Locale::Spanish, StatusMessage::Invalid(ValidationError::EmptyQuery)) => {
                "Por favor, introduce un término de búsqueda.".to_string()
            }
            (Locale::English, StatusMessage::Invalid(ValidationError::InvalidIsbn)) => {
                "Please enter a valid ISBN (10 or 13 digits).".to_string()
            }
            (Locale::Spanish, StatusMessage::Invalid(ValidationError::InvalidIsbn)) => {
                "Por favor, introduce un ISBN válido.".to_string()
            }
            (Locale::English, StatusMessage::Invalid(ValidationError::InvalidEndpoint)) => {
                "The search service address is not a valid URL.".to_string()
            }
            (Locale::Spanish, StatusMessage::Invalid(ValidationError::InvalidEndpoint)) => {
                "La dirección del servicio de búsqueda no es válida.".to_string()
            }
            (Locale::English, StatusMessage::Loading) => "Loading results...".to_string(),
            (Locale::Spanish, StatusMessage::Loading) => "Cargando resultados...".to_string(),
            (
                _,
                StatusMessage::HttpError {
                    status,
                    status_text,
                },
            ) => format!("Error: {status} - {status_text}"),
            (Locale::English, StatusMessage::TransportError) => {
                "Something went wrong while searching. Please try again.".to_string()
            }
            (Locale::Spanish, StatusMessage::TransportError) => {
                "Ocurrió un error al buscar. Inténtalo de nuevo.".to_string()
            }
            (Locale::English, StatusMessage::NoResults) => {
                "No results found for this search.".to_string()
            }
            (Locale::Spanish, StatusMessage::NoResults) => {
                "No se encontraron resultados para la búsqueda.".to_string()
            }
            (Locale::English, StatusMessage::NoIsbnMatch { fragment }) => {
                format!("No books with ISBN containing '{fragment}'.")
            }
            (Locale::Spanish, StatusMessage::NoIsbnMatch { fragment }) => {
                format!("No se encontraron libros con el ISBN que contiene '{fragment}'.")
            }
            (Locale::English, StatusMessage::FilterFallback) => {
                "No previous results to filter. Running a new search...".to_string()
            }
            (Locale::Spanish, StatusMessage::FilterFallback) => {
                "No hay resultados previos para filtrar. Realizando nueva búsqueda...".to_string()
            }
        }
    }
}
