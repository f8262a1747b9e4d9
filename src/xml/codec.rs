use serde::de::DeserializeOwned;
use serde::Serialize;

use super::document::Element;
use super::malformed;
use crate::store::StoreError;

/// Serializes a record to an XML element named after the record type.
pub(crate) fn to_element<T: Serialize>(record: &T) -> Result<Element, StoreError> {
    let xml = quick_xml::se::to_string(record).map_err(malformed)?;
    Element::parse(&xml)
}

/// Deserializes a record from an element, whatever the element is named.
pub(crate) fn from_element<T: DeserializeOwned>(element: &Element) -> Result<T, StoreError> {
    quick_xml::de::from_str(element.as_xml()).map_err(malformed)
}
