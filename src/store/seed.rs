//! Sample news content
//!
//! Three fixed items loaded into the news table at store construction. Their
//! `publishedAt` values are set here, at seed time; runtime inserts always get
//! a server-set timestamp instead.

use serde_json::{json, Map, Value};
use uuid::Uuid;

/// Builds the three seed news records, ids included.
pub fn sample_news() -> Vec<Map<String, Value>> {
    vec![
        news_record(
            "Nouvelles Procédures d'Appel en Vigueur",
            "De nouvelles procédures simplifiées pour les appels civils entrent en vigueur \
             à partir du 1er janvier 2024. Ces changements visent à accélérer le traitement \
             des dossiers et améliorer l'accès à la justice.",
            "procedure",
            "urgent",
            "2023-12-15T00:00:00.000Z",
        ),
        news_record(
            "Digitalisation des Dossiers",
            "La cour adopte progressivement un système numérique pour tous les dossiers \
             d'appel. Cette modernisation permettra un suivi en temps réel et une gestion \
             plus efficace des procédures.",
            "procedure",
            "normal",
            "2023-12-10T00:00:00.000Z",
        ),
        news_record(
            "Sessions d'Information Publique",
            "Participez à nos sessions gratuites sur les droits et procédures d'appel. \
             Ces sessions sont ouvertes à tous les citoyens et se déroulent chaque premier \
             mercredi du mois.",
            "formation",
            "normal",
            "2023-12-05T00:00:00.000Z",
        ),
    ]
}

fn news_record(
    title: &str,
    content: &str,
    category: &str,
    priority: &str,
    published_at: &str,
) -> Map<String, Value> {
    let mut record = Map::new();
    record.insert("id".into(), json!(Uuid::new_v4().to_string()));
    record.insert("title".into(), json!(title));
    record.insert("content".into(), json!(content));
    record.insert("category".into(), json!(category));
    record.insert("priority".into(), json!(priority));
    record.insert("publishedAt".into(), json!(published_at));
    record
}
