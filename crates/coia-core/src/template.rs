//! Placeholder interpolation for phrase and scope templates.

/// Single-pass `{name}` interpolation.
///
/// Substituted values are copied verbatim and never rescanned, so a value
/// that itself contains `{role}` stays literal. Unmatched tokens and
/// unclosed braces are left as-is.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let extra: usize = args.iter().map(|(_, value)| value.len()).sum();
    let mut result = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            // Unclosed brace: emit the tail as-is
            result.push_str(&rest[open..]);
            return result;
        };

        let token = &after[..close];
        match args.iter().find(|&&(name, _)| name == token) {
            Some(&(_, value)) => result.push_str(value),
            None => result.push_str(&rest[open..open + close + 2]),
        }
        rest = &after[close + 1..];
    }

    result.push_str(rest);
    result
}
