use comfy_table::{ContentArrangement, Table};

pub fn run(seed: Option<u64>) -> Result<(), String> {
    let store = super::recovery_config(seed, None).question_store();
    let questions = store.list();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "ID", "Type", "Absurdity", "Question", "Options"]);

    for q in &questions {
        let options = if q.options.is_empty() {
            "-".to_string()
        } else {
            q.options.join(" / ")
        };
        table.add_row(vec![
            q.order.to_string(),
            q.id.to_string(),
            q.question_type.to_string(),
            format!("{}/10", q.absurdity_level),
            q.question_text.clone(),
            options,
        ]);
    }

    println!("{table}");
    println!();
    match seed {
        Some(seed) => println!("  {} questions (seed {seed})", questions.len()),
        None => println!("  {} questions (classic lineup)", questions.len()),
    }

    Ok(())
}
