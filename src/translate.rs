//! Message translation.
//!
//! Every user-facing message passes through a [`Translator`] before it is
//! attached to an error. The default [`Interpolator`] leaves the text as is
//! and only fills in placeholders.

use std::fmt::{Display, Write};

/// Translates a format string and substitutes its placeholders.
pub trait Translator {
    fn translate(&self, format: &str, args: &[&dyn Display]) -> String;
}

impl<F> Translator for F
where
    F: Fn(&str, &[&dyn Display]) -> String,
{
    fn translate(&self, format: &str, args: &[&dyn Display]) -> String {
        self(format, args)
    }
}

/// Identity translator with printf-style placeholders.
///
/// Understands positional `%1$s`, sequential `%s` and the `%%` escape.
/// Placeholders without a matching argument are kept verbatim.
///
/// # Example
///
/// ```rust
/// use transitioner::translate::{Interpolator, Translator};
///
/// let message = Interpolator.translate("Failed to apply \"%1$s\" transition", &[&"close"]);
/// assert_eq!(message, "Failed to apply \"close\" transition");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interpolator;

impl Translator for Interpolator {
    fn translate(&self, format: &str, args: &[&dyn Display]) -> String {
        let mut out = String::with_capacity(format.len());
        let mut sequential = 0;
        let mut rest = format;

        while let Some(pos) = rest.find('%') {
            out.push_str(&rest[..pos]);
            let tail = &rest[pos + 1..];

            if let Some(after) = tail.strip_prefix('%') {
                out.push('%');
                rest = after;
                continue;
            }

            if let Some(after) = tail.strip_prefix('s') {
                match args.get(sequential) {
                    Some(arg) => {
                        let _ = write!(out, "{arg}");
                    }
                    None => out.push_str("%s"),
                }
                sequential += 1;
                rest = after;
                continue;
            }

            let digits = tail.bytes().take_while(u8::is_ascii_digit).count();
            if digits > 0 {
                if let Some(after) = tail[digits..].strip_prefix("$s") {
                    let arg = tail[..digits]
                        .parse::<usize>()
                        .ok()
                        .and_then(|n| n.checked_sub(1))
                        .and_then(|index| args.get(index));
                    match arg {
                        Some(arg) => {
                            let _ = write!(out, "{arg}");
                        }
                        None => out.push_str(&rest[pos..pos + digits + 3]),
                    }
                    rest = after;
                    continue;
                }
            }

            out.push('%');
            rest = tail;
        }

        out.push_str(rest);
        out
    }
}
