//! Test fixtures and factory functions for creating test data.

use serde_json::json;

/// Card catalog snapshot with a small crypt and library.
pub fn catalog_json() -> String {
    json!([
        vampire(200001, "Anson (G1)", "Toreador", 8, "M", 2, &["AUS", "PRE"]),
        vampire(200002, "Beckett (G2)", "Gangrel", 9, "M", 3, &["ANI", "FOR"]),
        vampire(200003, "Lazverinus (G2)", "Nosferatu", 6, "M", 3, &["OBF", "ANI", "POT"]),
        vampire(200004, "Gutter (G2)", "Nosferatu", 7, "M", 3, &["OBF", "POT"]),
        vampire(200005, "Mata Hari (G2)", "Toreador antitribu", 7, "F", 3, &["OBF", "CEL"]),
        vampire(200006, "Arika (G2)", "Ventrue", 11, "F", 5, &["DOM", "FOR", "PRE"]),
        {
            "id": 200007, "name": "Jennie Orne", "types": ["Imbued"], "difficulty": 2,
            "capacity": 4, "gender": "F", "card_text": "Martyr"
        },
        library(100001, "Govern the Unaligned", "Action", &["dom"], "+1 bleed. Bleed."),
        library(100002, "Conditioning", "Action Modifier", &["dom"], "+1 bleed."),
        library(100003, "Deflection", "Reaction", &["dom"], "Redirect the bleed."),
        library(100004, "Bewitching Oration", "Action Modifier", &["pre"], "+1 bleed."),
        library(100005, "Spying Mission", "Action Modifier", &["obf"], "+1 stealth. +1 bleed."),
        library(100006, "Cloak the Gathering", "Action Modifier", &["obf"], "+1 stealth."),
        library(100007, "Blood Doll", "Master", &[], "Gain 1 blood."),
        {
            "id": 100008, "name": "Faceless Night", "types": ["Action Modifier"],
            "difficulty": 2, "disciplines": ["obf"], "bloodCost": "1",
            "card_text": "+2 stealth."
        }
    ])
    .to_string()
}

/// Curated wrong answers for Govern the Unaligned.
pub fn premium_json() -> String {
    json!({ "100001": ["Conditioning", "Deflection", "Bewitching Oration"] }).to_string()
}

/// An Obfuscate crypt with a stealth-and-bleed library.
pub fn stealth_bleed_decklist() -> &'static str {
    "Deck Name: Nosferatu Sneak\n\
     Crypt (8 cards)\n\
     4x Lazverinus (G2)      6  ANI OBF POT  Nosferatu:2\n\
     4x Gutter\n\
     \n\
     Library (24 cards)\n\
     # Action Modifier (16)\n\
     8x Spying Mission\n\
     8x Cloak the Gathering\n\
     # Action (4)\n\
     4x Govern the Unaligned\n\
     # Master (4)\n\
     4x Blood Doll\n"
}

fn vampire(
    id: i64,
    name: &str,
    clan: &str,
    capacity: u8,
    gender: &str,
    difficulty: u8,
    disciplines: &[&str],
) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "types": ["Vampire"],
        "difficulty": difficulty,
        "clan": clan,
        "capacity": capacity,
        "gender": gender,
        "disciplines": disciplines,
    })
}

fn library(id: i64, name: &str, kind: &str, disciplines: &[&str], text: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "types": [kind],
        "difficulty": 1,
        "disciplines": disciplines,
        "card_text": text,
    })
}
