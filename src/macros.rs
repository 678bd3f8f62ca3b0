// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String-type concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// Site vocabulary enum: each variant carries the display name(s) the site prints.
/// Generates `name()` and a lenient `from_name()` that falls back to the `Unknown`
/// variant, so new site vocabulary never fails a parse.
///
/// ```ignore
/// site_vocab! {
///     pub enum LabelStatus {
///         Active => ["active"],
///         Closed => ["closed"],
///     }
/// }
/// ```
#[macro_export]
macro_rules! site_vocab {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident => [$display:literal $(, $alias:literal)*] ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            $( $variant, )+
            #[default]
            Unknown,
        }

        impl $name {
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            pub fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $display, )+
                    $name::Unknown => "Unknown",
                }
            }

            /// Case- and whitespace-insensitive lookup. Never fails.
            pub fn from_name(raw: &str) -> Self {
                let key = $crate::core::sanitize::normalize_ws(raw).to_lowercase();
                if key.is_empty() {
                    return $name::Unknown;
                }
                $(
                    if key == $display.to_lowercase() $( || key == $alias.to_lowercase() )* {
                        return $name::$variant;
                    }
                )+
                $name::Unknown
            }

            pub fn is_known(self) -> bool {
                self != $name::Unknown
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}
