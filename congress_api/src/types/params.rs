//! Enumerated path arguments: bill listings, vote listings, nominee listings.

use std::str::FromStr;

use crate::Error;

macro_rules! path_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $what:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// The path segment for this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $value ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                $(
                    if s.eq_ignore_ascii_case($value) {
                        return Ok($name::$variant);
                    }
                )+
                Err(Error::InvalidArgument(format!("unknown {} {:?}", $what, s)))
            }
        }
    };
}

path_enum! {
    /// Bill listings: recent bills in a chamber, or bills by a member.
    BillType, "bill type" {
        Introduced => "introduced",
        Updated => "updated",
        Active => "active",
        Passed => "passed",
        Enacted => "enacted",
        Vetoed => "vetoed",
        Major => "major",
        /// Only valid for bills by a member.
        Cosponsored => "cosponsored",
        /// Only valid for bills by a member.
        Withdrawn => "withdrawn",
    }
}

path_enum! {
    /// Detail pages hanging off a single bill.
    BillSubresource, "bill subresource" {
        Amendments => "amendments",
        Related => "related",
        Subjects => "subjects",
        Cosponsors => "cosponsors",
        Actions => "actions",
        Statements => "statements",
    }
}

path_enum! {
    /// Member vote-behavior listings.
    VoteType, "vote type" {
        Missed => "missed",
        Party => "party",
        LoneNo => "loneno",
        Perfect => "perfect",
    }
}

path_enum! {
    /// Nominee listings.
    NomineeType, "nominee type" {
        Received => "received",
        Updated => "updated",
        Confirmed => "confirmed",
        Withdrawn => "withdrawn",
    }
}

path_enum! {
    /// What two members are compared on.
    CompareType, "comparison" {
        Votes => "votes",
        Bills => "bills",
    }
}
