use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub surname: String,
}

pub fn person(id: i64, name: &str, surname: &str) -> Person {
    Person {
        id,
        name: name.to_string(),
        surname: surname.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Customer {
    pub name: String,
    pub surname: String,
}

pub fn customer(name: &str, surname: &str) -> Customer {
    Customer {
        name: name.to_string(),
        surname: surname.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Caller {
    pub phone: String,
}

pub fn caller(phone: &str) -> Caller {
    Caller {
        phone: phone.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Badge {
    pub id: String,
    pub holder: String,
}

pub fn badge(id: &str, holder: &str) -> Badge {
    Badge {
        id: id.to_string(),
        holder: holder.to_string(),
    }
}
