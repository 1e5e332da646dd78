#![allow(dead_code)]

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use fieldwise_builder::{
    Decimal, Descriptor, FieldKind, Introspect, Reflect, SimpleType, Value, introspect,
    reflect_enum, reflect_object,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Suspended,
}

reflect_enum!(Status { Active, Suspended });

#[derive(Debug, Clone)]
pub struct Address {
    pub street: String,
    pub city: String,
}

introspect! {
    Address {
        street,
        city,
    }
}

#[derive(Debug, Clone)]
pub struct Person {
    pub name: String,
    pub age: i32,
    pub status: Status,
    pub last_accessed: Option<DateTime<Utc>>,
    pub cache: Vec<String>,
    pub address: Option<Address>,
    pub internal_id: Vec<u8>,
}

introspect! {
    Person {
        name,
        age,
        status,
        #[exclude_from_equality]
        last_accessed,
        #[exclude_from_string]
        cache,
        #[include_in_string]
        address,
        internal_id,
    }
}

#[derive(Debug, Clone)]
pub struct Employee {
    pub person: Person,
    pub employee_no: i64,
    pub salary: Decimal,
}

introspect! {
    Employee extends person {
        employee_no,
        #[exclude_from_equality]
        salary,
    }
}

/// Custom value type standing in for a decimal.
#[derive(Debug, Clone, Copy)]
pub struct Money(pub Decimal);

impl Reflect for Money {
    fn field_kind() -> FieldKind {
        FieldKind::Implements(SimpleType::Decimal)
    }

    fn reflect(&self) -> Value<'_> {
        Value::Decimal(self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Invoice {
    pub total: Money,
    pub lines: BTreeMap<String, i64>,
    pub notes: Vec<String>,
}

introspect! {
    Invoice {
        total,
        lines,
        notes,
    }
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl Introspect for Credentials {
    fn descriptor() -> &'static Descriptor<Self> {
        static DESCRIPTOR: std::sync::OnceLock<Descriptor<Credentials>> =
            std::sync::OnceLock::new();
        DESCRIPTOR.get_or_init(|| {
            Descriptor::<Credentials>::describe("Credentials")
                .field("user", |c| &c.user)
                .restricted::<String>("password")
                .build()
        })
    }
}

reflect_object!(Credentials);

#[derive(Debug, Clone)]
pub struct Vault {
    pub label: String,
    pub secret: String,
}

impl Introspect for Vault {
    fn descriptor() -> &'static Descriptor<Self> {
        static DESCRIPTOR: std::sync::OnceLock<Descriptor<Vault>> = std::sync::OnceLock::new();
        DESCRIPTOR.get_or_init(|| {
            Descriptor::<Vault>::describe("Vault")
                .field("label", |v| &v.label)
                .restricted::<String>("secret")
                .exclude_from_equality("secret")
                .exclude_from_string("secret")
                .build()
        })
    }
}

pub fn address() -> Address {
    Address {
        street: "Main St".to_string(),
        city: "Springfield".to_string(),
    }
}

pub fn ann() -> Person {
    Person {
        name: "Ann".to_string(),
        age: 30,
        status: Status::Active,
        last_accessed: None,
        cache: vec!["warm".to_string()],
        address: Some(address()),
        internal_id: vec![1, 2],
    }
}

pub fn accessed_at(seconds: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(seconds, 0).single()
}

pub fn employee() -> Employee {
    Employee {
        person: ann(),
        employee_no: 7,
        salary: "1000.00".parse().unwrap(),
    }
}

pub fn invoice(total: &str) -> Invoice {
    let mut lines = BTreeMap::new();
    lines.insert("widget".to_string(), 2);
    Invoice {
        total: Money(total.parse().unwrap()),
        lines,
        notes: vec!["paid".to_string()],
    }
}
