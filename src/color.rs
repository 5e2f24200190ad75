use image::Rgb;
use serde::{Deserialize, Serialize};
use crate::colornames;
use crate::error::{PicassoError, Result};
use crate::pipeline::Options;

/// A color argument as written by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSpec {
    /// color keyword, hex code or functional notation like `rgb(...)`
    Named(String),
    /// 3 or 4 explicit channel values
    Explicit(Vec<u8>),
}

/// Canonical color, independent of how it was written.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Rgb([u8; 3]),
    Rgba([u8; 4]),
}

impl ColorSpec {
    /// Classifies one side of an assignment command.
    ///
    /// `(r, g, b)` and `r,g,b` (optionally with a fourth alpha value) become
    /// [`ColorSpec::Explicit`], everything else is kept as a name and only
    /// checked when it is resolved.
    pub fn from_token(token: &str) -> ColorSpec {
        let token = token.trim();
        let inner = token
            .strip_prefix('(')
            .and_then(|t| t.strip_suffix(')'))
            .unwrap_or(token);
        if inner.contains(',') && !inner.contains('(') {
            let values: Result<Vec<u8>, _> = inner.split(',').map(|v| v.trim().parse::<u8>()).collect();
            if let Ok(values) = values {
                if values.len() == 3 || values.len() == 4 {
                    return ColorSpec::Explicit(values);
                }
            }
        }
        ColorSpec::Named(token.to_owned())
    }

    pub fn resolve(&self) -> Result<Color> {
        match self {
            ColorSpec::Explicit(values) => match values.as_slice() {
                &[r, g, b] => Ok(Color::Rgb([r, g, b])),
                &[r, g, b, a] => Ok(Color::Rgba([r, g, b, a])),
                _ => Err(PicassoError::InvalidColorSpec(format!("{values:?}"))),
            },
            ColorSpec::Named(name) => parse_color_string(name)
                .ok_or_else(|| PicassoError::InvalidColorSpec(name.clone())),
        }
    }
}

impl Color {
    /// The color to write into the RGB plane; the alpha plane is never
    /// edited, so a target alpha is dropped.
    pub fn rgb(&self) -> Rgb<u8> {
        match *self {
            Color::Rgb(rgb) => Rgb(rgb),
            Color::Rgba([r, g, b, _]) => Rgb([r, g, b]),
        }
    }

    /// The color to look for in the RGB plane. A color with alpha has four
    /// channels and never equals a three channel pixel.
    pub fn rgb_match(&self) -> Option<Rgb<u8>> {
        match *self {
            Color::Rgb(rgb) => Some(Rgb(rgb)),
            Color::Rgba(_) => None,
        }
    }
}

/// Resolves both sides of a replacement independently.
pub fn translate_colors(color1: &ColorSpec, color2: &ColorSpec, options: &Options) -> Result<(Color, Color)> {
    verbose!(options, "colors before translating: {color1:?}, {color2:?}");
    let translated = (color1.resolve()?, color2.resolve()?);
    verbose!(options, "translated colors: {:?}, {:?}", translated.0, translated.1);
    Ok(translated)
}

fn parse_color_string(s: &str) -> Option<Color> {
    let s = s.trim().to_ascii_lowercase();
    if let Some(rgb) = colornames::lookup(&s) {
        return Some(Color::Rgb(rgb));
    }
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    let (func, args) = s.strip_suffix(')')?.split_once('(')?;
    let args: Vec<&str> = args.split(',').map(str::trim).collect();
    match (func.trim(), args.as_slice()) {
        ("rgb", &[r, g, b]) => Some(Color::Rgb([rgb_component(r)?, rgb_component(g)?, rgb_component(b)?])),
        ("rgba", &[r, g, b, a]) => Some(Color::Rgba([
            rgb_component(r)?,
            rgb_component(g)?,
            rgb_component(b)?,
            a.parse().ok()?,
        ])),
        ("hsl", &[h, s, l]) => {
            let (h, s, l) = (degrees(h)?, percentage(s)?, percentage(l)?);
            Some(Color::Rgb(to_u8(hls_to_rgb(h, l, s))))
        }
        ("hsv" | "hsb", &[h, s, v]) => {
            let (h, s, v) = (degrees(h)?, percentage(s)?, percentage(v)?);
            Some(Color::Rgb(to_u8(hsv_to_rgb(h, s, v))))
        }
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let digit = |i: usize, len: usize| -> Option<u8> {
        let value = u8::from_str_radix(hex.get(i..i + len)?, 16).ok()?;
        // #rgb expands each digit, `f` -> `ff`
        Some(if len == 1 { value * 17 } else { value })
    };
    match hex.len() {
        3 => Some(Color::Rgb([digit(0, 1)?, digit(1, 1)?, digit(2, 1)?])),
        4 => Some(Color::Rgba([digit(0, 1)?, digit(1, 1)?, digit(2, 1)?, digit(3, 1)?])),
        6 => Some(Color::Rgb([digit(0, 2)?, digit(2, 2)?, digit(4, 2)?])),
        8 => Some(Color::Rgba([digit(0, 2)?, digit(2, 2)?, digit(4, 2)?, digit(6, 2)?])),
        _ => None,
    }
}

/// `128` or `50%`
fn rgb_component(s: &str) -> Option<u8> {
    match s.strip_suffix('%') {
        Some(pct) => {
            let pct: f64 = pct.trim().parse().ok()?;
            if !(0.0..=100.0).contains(&pct) {
                return None;
            }
            Some((pct * 255. / 100. + 0.5) as u8)
        }
        None => s.parse().ok(),
    }
}

fn degrees(s: &str) -> Option<f64> {
    let deg: f64 = s.parse().ok()?;
    (deg >= 0.).then_some(deg / 360.)
}

/// Any non-negative percentage, values past 100% saturate on conversion.
fn percentage(s: &str) -> Option<f64> {
    let pct: f64 = s.strip_suffix('%')?.trim().parse().ok()?;
    (pct >= 0.).then_some(pct / 100.)
}

fn to_u8((r, g, b): (f64, f64, f64)) -> [u8; 3] {
    let conv = |v: f64| (v * 255. + 0.5).clamp(0., 255.) as u8;
    [conv(r), conv(g), conv(b)]
}

fn hls_to_rgb(h: f64, l: f64, s: f64) -> (f64, f64, f64) {
    if s == 0. {
        return (l, l, l);
    }
    let m2 = if l <= 0.5 { l * (1. + s) } else { l + s - l * s };
    let m1 = 2. * l - m2;
    let v = |hue: f64| {
        let hue = hue.rem_euclid(1.);
        if hue < 1. / 6. {
            m1 + (m2 - m1) * hue * 6.
        } else if hue < 0.5 {
            m2
        } else if hue < 2. / 3. {
            m1 + (m2 - m1) * (2. / 3. - hue) * 6.
        } else {
            m1
        }
    };
    (v(h + 1. / 3.), v(h), v(h - 1. / 3.))
}

fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0. {
        return (v, v, v);
    }
    let h = h.rem_euclid(1.) * 6.;
    let i = h.floor();
    let f = h - i;
    let p = v * (1. - s);
    let q = v * (1. - s * f);
    let t = v * (1. - s * (1. - f));
    match i as u8 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}
