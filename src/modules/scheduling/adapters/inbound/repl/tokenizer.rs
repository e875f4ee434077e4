// Split a command line into tokens.
//
// Whitespace separates tokens, except inside a quoted span: text between a pair of
// matching single or double quotes belongs to one token, quotes removed.
// A quote character without a partner further along the line is kept as is.

const QUOTES: [char; 2] = ['\'', '"'];

pub fn tokenize(line: &str) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    let mut tokens = Vec::new();
    let mut current: Option<String> = None;
    let mut index = 0;

    while index < chars.len() {
        let c = chars[index];
        if c.is_whitespace() {
            tokens.extend(current.take());
            index += 1;
            continue;
        }

        let token = current.get_or_insert_with(String::new);
        match closing_quote(&chars, index) {
            Some(close) => {
                token.extend(&chars[index + 1..close]);
                index = close + 1;
            }
            None => {
                token.push(c);
                index += 1;
            }
        }
    }
    tokens.extend(current);
    tokens
}

// Position of the quote closing a non empty span opened at `open`.
fn closing_quote(chars: &[char], open: usize) -> Option<usize> {
    let quote = chars[open];
    if !QUOTES.contains(&quote) {
        return None;
    }
    chars[open + 1..]
        .iter()
        .position(|&c| c == quote)
        .filter(|&offset| offset > 0)
        .map(|offset| open + 1 + offset)
}
