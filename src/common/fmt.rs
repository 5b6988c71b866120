// src/common/fmt.rs

use chrono::{DateTime, NaiveDate, Utc};

const FORMATO_DATA_HORA: &str = "%d/%m/%Y às %H:%M";
const FORMATO_DATA: &str = "%d/%m/%Y";

// Formata um timestamp no padrão brasileiro (ex: "25/12/2024 às 14:30").
pub fn data_hora_br(dt: &DateTime<Utc>) -> String {
    dt.format(FORMATO_DATA_HORA).to_string()
}

pub fn data_hora_br_opt(dt: Option<&DateTime<Utc>>) -> Option<String> {
    dt.map(data_hora_br)
}

// Formata uma data no padrão brasileiro (ex: "25/12/2024").
pub fn data_br(data: &NaiveDate) -> String {
    data.format(FORMATO_DATA).to_string()
}

// Idem, para timestamps dos quais só interessa a data.
pub fn data_br_dt(dt: &DateTime<Utc>) -> String {
    dt.format(FORMATO_DATA).to_string()
}

pub fn ativo_desc(ativo: bool) -> String {
    if ativo { "Sim" } else { "Não" }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formata_data_hora() {
        let dt = Utc.with_ymd_and_hms(2024, 12, 25, 14, 30, 0).unwrap();
        assert_eq!(data_hora_br(&dt), "25/12/2024 às 14:30");
    }

    #[test]
    fn formata_data() {
        let data = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        assert_eq!(data_br(&data), "02/01/2025");
    }

    #[test]
    fn descricao_de_ativo() {
        assert_eq!(ativo_desc(true), "Sim");
        assert_eq!(ativo_desc(false), "Não");
    }

    #[test]
    fn data_hora_opcional() {
        assert_eq!(data_hora_br_opt(None), None);
        let dt = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(data_hora_br_opt(Some(&dt)).as_deref(), Some("01/01/2024 às 00:00"));
    }
}
