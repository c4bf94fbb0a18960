//! Closed token enumerations used by attributes and simple-content elements.
//!
//! Every enumeration maps one-to-one onto the tokens the schema defines. Parsing
//! any other token fails with [`ModelError::UnknownEnumValue`]; there is no
//! case folding and no trimming.

use crate::error::ModelError;

macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $token:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every value in schema declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the XML token.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok($name::$variant),)+
                    _ => Err(ModelError::unknown_enum(stringify!($name), s)),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let token = String::deserialize(deserializer)?;
                token.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

token_enum! {
    /// Natural-language code carried by the `L` attribute of language-tagged text.
    Language {
        Aa => "AA",
        Ab => "AB",
        Af => "AF",
        Am => "AM",
        Ar => "AR",
        As => "AS",
        Ay => "AY",
        Az => "AZ",
        Ba => "BA",
        Be => "BE",
        Bg => "BG",
        Bh => "BH",
        Bi => "BI",
        Bn => "BN",
        Bo => "BO",
        Br => "BR",
        Ca => "CA",
        Co => "CO",
        Cs => "CS",
        Cy => "CY",
        Da => "DA",
        De => "DE",
        Dz => "DZ",
        El => "EL",
        En => "EN",
        Eo => "EO",
        Es => "ES",
        Et => "ET",
        Eu => "EU",
        Fa => "FA",
        Fi => "FI",
        Fj => "FJ",
        Fo => "FO",
        ForAll => "FOR-ALL",
        Fr => "FR",
        Fy => "FY",
        Ga => "GA",
        Gd => "GD",
        Gl => "GL",
        Gn => "GN",
        Gu => "GU",
        Ha => "HA",
        Hi => "HI",
        Hr => "HR",
        Hu => "HU",
        Hy => "HY",
        Ia => "IA",
        Ie => "IE",
        Ik => "IK",
        In => "IN",
        Is => "IS",
        It => "IT",
        Iw => "IW",
        Ja => "JA",
        Ji => "JI",
        Jw => "JW",
        Ka => "KA",
        Kk => "KK",
        Kl => "KL",
        Km => "KM",
        Kn => "KN",
        Ko => "KO",
        Ks => "KS",
        Ku => "KU",
        Ky => "KY",
        La => "LA",
        Ln => "LN",
        Lo => "LO",
        Lt => "LT",
        Lv => "LV",
        Mg => "MG",
        Mi => "MI",
        Mk => "MK",
        Ml => "ML",
        Mn => "MN",
        Mo => "MO",
        Mr => "MR",
        Ms => "MS",
        Mt => "MT",
        My => "MY",
        Na => "NA",
        Ne => "NE",
        Nl => "NL",
        No => "NO",
        Oc => "OC",
        Om => "OM",
        Or => "OR",
        Pa => "PA",
        Pl => "PL",
        Ps => "PS",
        Pt => "PT",
        Qu => "QU",
        Rm => "RM",
        Rn => "RN",
        Ro => "RO",
        Ru => "RU",
        Rw => "RW",
        Sa => "SA",
        Sd => "SD",
        Sg => "SG",
        Sh => "SH",
        Si => "SI",
        Sk => "SK",
        Sl => "SL",
        Sm => "SM",
        Sn => "SN",
        So => "SO",
        Sq => "SQ",
        Sr => "SR",
        Ss => "SS",
        St => "ST",
        Su => "SU",
        Sv => "SV",
        Sw => "SW",
        Ta => "TA",
        Te => "TE",
        Tg => "TG",
        Th => "TH",
        Ti => "TI",
        Tk => "TK",
        Tl => "TL",
        Tn => "TN",
        To => "TO",
        Tr => "TR",
        Ts => "TS",
        Tt => "TT",
        Tw => "TW",
        Uk => "UK",
        Ur => "UR",
        Uz => "UZ",
        Vi => "VI",
        Vo => "VO",
        Wo => "WO",
        Xh => "XH",
        Yo => "YO",
        Zh => "ZH",
        Zu => "ZU",
    }
}

token_enum! {
    /// Value of the `TYPE` attribute on `<E>`.
    EmphasisType {
        Bold => "BOLD",
        BoldItalic => "BOLDITALIC",
        Italic => "ITALIC",
        Plain => "PLAIN",
    }
}

token_enum! {
    /// Value of the `FONT` attribute on `<E>`.
    EmphasisFont {
        Default => "DEFAULT",
        Mono => "MONO",
    }
}

token_enum! {
    /// Value of the `BREAK` attribute on paginatable blocks.
    PageBreak {
        Break => "BREAK",
        NoBreak => "NO-BREAK",
    }
}

token_enum! {
    /// Value of the `KEEP-WITH-PREVIOUS` attribute on paginatable blocks.
    KeepWithPrevious {
        Keep => "KEEP",
        NoKeep => "NO-KEEP",
    }
}

token_enum! {
    /// Content of `<DATA-FILTER-TYPE>`.
    DataFilterType {
        Always => "ALWAYS",
        MaskedNewDiffersMaskedOld => "MASKED-NEW-DIFFERS-MASKED-OLD",
        MaskedNewDiffersX => "MASKED-NEW-DIFFERS-X",
        MaskedNewEqualsX => "MASKED-NEW-EQUALS-X",
        Never => "NEVER",
        NewIsOutside => "NEW-IS-OUTSIDE",
        NewIsWithin => "NEW-IS-WITHIN",
        OneEveryN => "ONE-EVERY-N",
    }
}
