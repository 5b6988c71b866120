// src/common/i18n.rs

use std::collections::HashMap;

// Idioma usado quando o solicitado não possui catálogo ou chave.
pub const DEFAULT_LOCALE: &str = "en";

// Catálogos de mensagens embutidos no binário.
// As traduções ficam em locales/<idioma>.json.
#[derive(Clone)]
pub struct I18nStore {
    catalogs: HashMap<String, HashMap<String, String>>,
}

impl I18nStore {
    pub fn new() -> Self {
        let mut catalogs = HashMap::new();
        catalogs.insert("pt".to_string(), Self::parse(include_str!("../../locales/pt.json")));
        catalogs.insert("en".to_string(), Self::parse(include_str!("../../locales/en.json")));
        Self { catalogs }
    }

    // .expect() é aceitável aqui: os catálogos são embutidos em tempo de
    // compilação; se estiverem inválidos, a aplicação não deve iniciar.
    fn parse(raw: &str) -> HashMap<String, String> {
        serde_json::from_str(raw).expect("Catálogo de mensagens inválido")
    }

    // Busca a mensagem no idioma pedido, com fallback para o padrão.
    // Se a chave não existir em lugar nenhum, devolve a própria chave.
    pub fn translate(&self, locale: &str, key: &str) -> String {
        self.catalogs
            .get(locale)
            .and_then(|catalog| catalog.get(key))
            .or_else(|| {
                self.catalogs
                    .get(DEFAULT_LOCALE)
                    .and_then(|catalog| catalog.get(key))
            })
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traduz_no_idioma_pedido() {
        let store = I18nStore::new();
        assert_eq!(store.translate("pt", "camara_not_found"), "Câmara não encontrada");
        assert_eq!(store.translate("en", "camara_not_found"), "Chamber not found");
    }

    #[test]
    fn idioma_desconhecido_cai_no_padrao() {
        let store = I18nStore::new();
        assert_eq!(store.translate("fr", "usuario_not_found"), "User not found");
    }

    #[test]
    fn chave_desconhecida_devolve_a_chave() {
        let store = I18nStore::new();
        assert_eq!(store.translate("pt", "chave_inexistente"), "chave_inexistente");
    }
}
