mod chamber;
pub use self::chamber::Chamber;

mod congress;
pub use self::congress::{congress_for_year, current_congress, FIRST_CONGRESS_YEAR};

mod date;
pub use self::date::{format_date, parse_date, IntoDate};

mod envelope;
pub use self::envelope::{Envelope, Unwrap, RECORD_NOT_FOUND};

mod params;
pub use self::params::{BillSubresource, BillType, CompareType, NomineeType, VoteType};
