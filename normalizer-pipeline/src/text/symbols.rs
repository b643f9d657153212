/// Pairs of shorthand symbols and the word operators that replace them.
const SYMBOLS: [(&str, &str); 4] = [("->", "implies"), ("&", "and"), ("|", "or"), ("~", "not")];

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Replaces the symbols `->`, `&`, `|` and `~` in `line` with `implies`, `and`, `or` and
/// `not`, in a single left-to-right scan; replaced text is never scanned again.
///
/// A word operator is separated by a space from an adjacent identifier character that it
/// would otherwise fuse with, so `~p` becomes `not p` rather than `notp`. Text without
/// symbols is returned unchanged.
///
/// **Example**:
/// ```rust
/// use normalizer_pipeline::text::translate_symbols;
///
/// assert_eq!("a and b or not c implies d", translate_symbols("a & b | ~c -> d"));
/// ```
pub fn translate_symbols(line: &str) -> String {
    let mut result = String::with_capacity(line.len());
    let mut rest = line;

    'scan: while !rest.is_empty() {
        for (symbol, word) in SYMBOLS.iter() {
            if let Some(tail) = rest.strip_prefix(symbol) {
                if result.chars().last().map_or(false, is_ident_char) {
                    result.push(' ');
                }
                result.push_str(word);
                if tail.chars().next().map_or(false, is_ident_char) {
                    result.push(' ');
                }
                rest = tail;
                continue 'scan;
            }
        }

        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            result.push(c);
        }
        rest = chars.as_str();
    }
    result
}
