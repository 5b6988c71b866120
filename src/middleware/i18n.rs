// src/middleware/i18n.rs

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

use crate::common::i18n::DEFAULT_LOCALE;

// Extrator de idioma: lê o cabeçalho Accept-Language e guarda a tag
// primária ("pt-BR" vira "pt"). Nunca falha; sem cabeçalho, usa o padrão.
pub struct Locale(pub String);

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let lang = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|header_value| header_value.to_str().ok())
            .and_then(|header_str| {
                accept_language::parse(header_str)
                    .first()
                    .map(|tag_string| {
                        // "pt-BR" -> ["pt", "BR"] -> "pt"
                        tag_string.split('-').next().unwrap_or(tag_string).to_string()
                    })
            })
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());

        Ok(Locale(lang))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;

    async fn locale_de(header: Option<&str>) -> String {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = header {
            builder = builder.header(header::ACCEPT_LANGUAGE, value);
        }
        let request = builder.body(Body::empty()).unwrap();
        let (mut parts, _) = request.into_parts();
        let Ok(Locale(lang)) = Locale::from_request_parts(&mut parts, &()).await;
        lang
    }

    #[tokio::test]
    async fn extrai_a_tag_primaria() {
        assert_eq!(locale_de(Some("pt-BR,pt;q=0.9,en;q=0.8")).await, "pt");
    }

    #[tokio::test]
    async fn sem_cabecalho_usa_o_padrao() {
        assert_eq!(locale_de(None).await, "en");
    }

    #[tokio::test]
    async fn tag_simples_passa_direto() {
        assert_eq!(locale_de(Some("en")).await, "en");
    }
}
