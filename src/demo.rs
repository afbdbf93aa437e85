//! Enums shipped with the tool, so there is something to inspect

use xenum::{EnumTraits, EnumDisplay, EnumFromStr, x_enum};

x_enum! {
    #[derive(Debug)]
    pub enum Color {
        Red,
        Green = 5,
        Blue,
    }
}

x_enum! {
    #[derive(Debug)]
    pub enum Weekday: u8 {
        Monday = 1,
        Tuesday,
        Wednesday,
        Thursday,
        Friday,
        Saturday,
        Sunday,
    }
}

#[repr(u16)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumTraits, EnumDisplay, EnumFromStr)]
pub enum HttpStatus {
    Ok = 200,
    Created,
    Accepted,
    #[display("Moved Permanently")]
    MovedPermanently = 301,
    #[display("Bad Request")]
    BadRequest = 400,
    #[display("Not Found")]
    NotFound = 404,
    #[display("Internal Server Error")]
    InternalServerError = 500,
}

#[repr(i8)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumTraits)]
pub enum Ordering {
    Less = -1,
    Equal,
    Greater,
}
