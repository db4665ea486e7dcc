use std::fs;

const SECTIONS: [&str; 3] = ["theme", "typography", "layout"];

fn main() {
    // The bundled config is compiled in, so reject a broken one at build time
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");
    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {}", e),
    };

    for section in SECTIONS {
        if !table.get(section).is_some_and(toml::Value::is_table) {
            panic!("default_config.toml is missing the [{}] table", section);
        }
    }

    if let Some(theme) = table.get("theme").and_then(toml::Value::as_table) {
        for (key, value) in theme {
            let color = value.as_str().unwrap_or_default();
            let hex = color.strip_prefix('#').unwrap_or_default();
            if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                panic!("theme.{} must be a #rrggbb color, got {}", key, value);
            }
        }
    }
}
