use scrumpy_core::board::{parse_card, RawCard};

pub fn run(title: &str) -> Result<(), Box<dyn std::error::Error>> {
    let raw = RawCard {
        title: title.to_string(),
        labels: Vec::new(),
        composing: false,
    };
    if let Some(card) = parse_card(&raw) {
        println!("{}", serde_json::to_string_pretty(&card)?);
    }
    Ok(())
}
