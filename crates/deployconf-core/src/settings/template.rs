//! Deployment file template rendering.

use super::registry::DefaultsRegistry;

/// Render every setting as a commented properties entry, in catalog order.
///
/// Settings without a default get an empty value. The output parses as an
/// empty properties layer, so it can be dropped in as a starting point.
pub fn render_template(registry: &DefaultsRegistry) -> String {
    let mut out = String::from("# Deployment configuration\n");

    for setting in registry.iter() {
        out.push('\n');
        out.push_str(&format!("# {}\n", setting.describe()));
        out.push_str(&format!(
            "#{}={}\n",
            setting.name(),
            escape_value(setting.default_value().unwrap_or(""))
        ));
    }

    out
}

/// Escape a value for the properties format.
pub(crate) fn escape_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for (i, c) in value.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ' ' if i == 0 => out.push_str("\\ "),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::keys;
    use crate::settings::paths::DefaultPaths;

    fn registry() -> DefaultsRegistry {
        let paths = DefaultPaths::new("/cfg", "/cache", "/jdk", "/sys");
        DefaultsRegistry::build(&paths).unwrap()
    }

    #[test]
    fn test_template_lists_every_setting_in_order() {
        let registry = registry();
        let template = render_template(&registry);

        let mut last = 0;
        for name in registry.names() {
            let needle = format!("#{}=", name);
            let pos = template.find(&needle).unwrap();
            assert!(pos >= last, "{} out of order", name);
            last = pos;
        }
    }

    #[test]
    fn test_template_shows_defaults_and_hints() {
        let template = render_template(&registry());
        assert!(template.contains("# integer in [0, 10000]\n#deployment.javaws.update.timeout=500\n"));
        assert!(template.contains(&format!("#{}=\n", keys::PROXY_HTTP_HOST)));
        assert!(template.contains("# any text\n"));
    }

    #[test]
    fn test_escape_value() {
        assert_eq!(escape_value(r"C:\jre"), r"C:\\jre");
        assert_eq!(escape_value(" lead"), r"\ lead");
        assert_eq!(escape_value("a b"), "a b");
    }
}
