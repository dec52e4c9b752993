use nom::{
    bytes::complete::take_while_m_n,
    character::complete::char,
    combinator::{all_consuming, map_res, opt},
    IResult, Parser,
};

use crate::model::Color;

fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Parse two hex digits into one channel
fn hex_channel(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, is_hex_digit), |digits: &str| {
        u8::from_str_radix(digits, 16)
    })
    .parse(input)
}

/// Parse `#RRGGBB` or `RRGGBB`
fn hex_color(input: &str) -> IResult<&str, Color> {
    let (input, _) = opt(char('#')).parse(input)?;
    let (input, (r, g, b)) = (hex_channel, hex_channel, hex_channel).parse(input)?;
    Ok((input, Color::new(r, g, b)))
}

/// Parse a whole string as a hex color; anything but exactly six digits fails
pub fn parse_hex_color(value: &str) -> Option<Color> {
    all_consuming(hex_color)
        .parse(value.trim())
        .ok()
        .map(|(_, color)| color)
}
