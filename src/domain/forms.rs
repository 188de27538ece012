//! Submission forms and their validation.
//!
//! Forms hold exactly what the user typed. `validate` turns them into typed
//! values ([`AdSubmission`], [`ListingDraft`], [`Registration`]) or a
//! [`CeylandError::Validation`] carrying one message per failing field.
//! Nothing reaches the catalog without passing through here.

use std::str::FromStr;

use super::error::{CeylandError, FieldErrors, Result};
use super::listing::{Listing, ListingDraft, ListingPatch, ListingType, DEFAULT_IMAGE};

/// Seller contact attached to a public ad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// A validated public ad, ready to be posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdSubmission {
    pub draft: ListingDraft,
    pub description: String,
    pub contact: Contact,
}

/// Raw state of the public "post an ad" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdForm {
    pub title: String,
    pub price: String,
    pub location: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub area: String,
    pub property_type: String,
    pub listing_type: String,
    pub description: String,
    pub image: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
}

impl Default for AdForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            price: String::new(),
            location: String::new(),
            bedrooms: "1".to_string(),
            bathrooms: "1".to_string(),
            area: String::new(),
            property_type: "House".to_string(),
            listing_type: "sale".to_string(),
            description: String::new(),
            image: String::new(),
            contact_name: String::new(),
            contact_email: String::new(),
            contact_phone: String::new(),
        }
    }
}

impl AdForm {
    /// Sets a field by its form name. Returns `false` for unknown fields.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        let value = value.into();
        let slot = match field {
            "title" => &mut self.title,
            "price" => &mut self.price,
            "location" => &mut self.location,
            "bedrooms" => &mut self.bedrooms,
            "bathrooms" => &mut self.bathrooms,
            "area" => &mut self.area,
            "type" | "property_type" => &mut self.property_type,
            "listing_type" | "listingType" => &mut self.listing_type,
            "description" => &mut self.description,
            "image" => &mut self.image,
            "contact_name" | "name" => &mut self.contact_name,
            "contact_email" | "email" => &mut self.contact_email,
            "contact_phone" | "phone" => &mut self.contact_phone,
            _ => return false,
        };
        *slot = value;
        true
    }

    /// Validates the form into an [`AdSubmission`].
    ///
    /// Public ads are never featured.
    ///
    /// # Errors
    ///
    /// Returns [`CeylandError::Validation`] listing every failing field.
    pub fn validate(&self) -> Result<AdSubmission> {
        let mut errors = FieldErrors::new();

        require_text(&mut errors, "title", &self.title, "Title is required");
        let price = positive::<u64>(&mut errors, "price", &self.price, "Valid price is required");
        require_text(&mut errors, "location", &self.location, "Location is required");
        let area = positive::<u32>(&mut errors, "area", &self.area, "Valid area is required");
        let bedrooms = count(&mut errors, "bedrooms", &self.bedrooms);
        let bathrooms = count(&mut errors, "bathrooms", &self.bathrooms);
        let listing_type = listing_type(&mut errors, &self.listing_type);
        require_text(&mut errors, "contact_name", &self.contact_name, "Contact name is required");
        require_text(&mut errors, "contact_email", &self.contact_email, "Contact email is required");
        require_text(&mut errors, "contact_phone", &self.contact_phone, "Contact phone is required");

        errors.into_result()?;

        Ok(AdSubmission {
            draft: ListingDraft {
                title: self.title.trim().to_string(),
                price: price.unwrap_or_default(),
                location: self.location.trim().to_string(),
                bedrooms: bedrooms.unwrap_or_default(),
                bathrooms: bathrooms.unwrap_or_default(),
                area: area.unwrap_or_default(),
                image: image_or_default(&self.image),
                property_type: self.property_type.trim().to_string(),
                featured: false,
                listing_type: listing_type.unwrap_or(ListingType::Sale),
            },
            description: self.description.trim().to_string(),
            contact: Contact {
                name: self.contact_name.trim().to_string(),
                email: self.contact_email.trim().to_string(),
                phone: self.contact_phone.trim().to_string(),
            },
        })
    }
}

/// Raw state of the back-office add/edit listing form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingForm {
    pub title: String,
    pub price: String,
    pub location: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub area: String,
    pub image: String,
    pub property_type: String,
    pub listing_type: String,
    pub featured: bool,
}

impl Default for ListingForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            price: "0".to_string(),
            location: String::new(),
            bedrooms: "1".to_string(),
            bathrooms: "1".to_string(),
            area: "0".to_string(),
            image: String::new(),
            property_type: "House".to_string(),
            listing_type: "sale".to_string(),
            featured: false,
        }
    }
}

impl ListingForm {
    /// Prefills the editor with an existing listing.
    #[must_use]
    pub fn from_listing(listing: &Listing) -> Self {
        Self {
            title: listing.title.clone(),
            price: listing.price.to_string(),
            location: listing.location.clone(),
            bedrooms: listing.bedrooms.to_string(),
            bathrooms: listing.bathrooms.to_string(),
            area: listing.area.to_string(),
            image: listing.image.clone(),
            property_type: listing.property_type.clone(),
            listing_type: match listing.listing_type {
                ListingType::Sale => "sale".to_string(),
                ListingType::Rent => "rent".to_string(),
            },
            featured: listing.featured,
        }
    }

    /// Sets a field by its form name. Returns `false` for unknown fields.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        let value = value.into();
        if field == "featured" {
            self.featured = matches!(value.trim(), "true" | "yes" | "1" | "on");
            return true;
        }
        let slot = match field {
            "title" => &mut self.title,
            "price" => &mut self.price,
            "location" => &mut self.location,
            "bedrooms" => &mut self.bedrooms,
            "bathrooms" => &mut self.bathrooms,
            "area" => &mut self.area,
            "image" => &mut self.image,
            "type" | "property_type" => &mut self.property_type,
            "listing_type" | "listingType" => &mut self.listing_type,
            _ => return false,
        };
        *slot = value;
        true
    }

    /// Validates the form into a draft for a new listing.
    ///
    /// # Errors
    ///
    /// Returns [`CeylandError::Validation`] listing every failing field.
    pub fn validate(&self) -> Result<ListingDraft> {
        let mut errors = FieldErrors::new();

        require_text(&mut errors, "title", &self.title, "Title is required");
        let price = positive::<u64>(&mut errors, "price", &self.price, "Valid price is required");
        require_text(&mut errors, "location", &self.location, "Location is required");
        let area = positive::<u32>(&mut errors, "area", &self.area, "Valid area is required");
        let bedrooms = count(&mut errors, "bedrooms", &self.bedrooms);
        let bathrooms = count(&mut errors, "bathrooms", &self.bathrooms);
        let listing_type = listing_type(&mut errors, &self.listing_type);

        errors.into_result()?;

        Ok(ListingDraft {
            title: self.title.trim().to_string(),
            price: price.unwrap_or_default(),
            location: self.location.trim().to_string(),
            bedrooms: bedrooms.unwrap_or_default(),
            bathrooms: bathrooms.unwrap_or_default(),
            area: area.unwrap_or_default(),
            image: image_or_default(&self.image),
            property_type: self.property_type.trim().to_string(),
            featured: self.featured,
            listing_type: listing_type.unwrap_or(ListingType::Sale),
        })
    }

    /// Validates the form into a full-field patch for an existing listing.
    ///
    /// The listing type is not part of the patch.
    ///
    /// # Errors
    ///
    /// Returns [`CeylandError::Validation`] listing every failing field.
    pub fn to_patch(&self) -> Result<ListingPatch> {
        let draft = self.validate()?;
        Ok(ListingPatch {
            title: Some(draft.title),
            price: Some(draft.price),
            location: Some(draft.location),
            bedrooms: Some(draft.bedrooms),
            bathrooms: Some(draft.bathrooms),
            area: Some(draft.area),
            image: Some(draft.image),
            property_type: Some(draft.property_type),
            featured: Some(draft.featured),
        })
    }
}

/// A validated account registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Raw state of the sign-up form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl RegistrationForm {
    /// Requires every field to be non-empty. No other credential check exists.
    ///
    /// # Errors
    ///
    /// Returns [`CeylandError::Validation`] listing every empty field.
    pub fn validate(&self) -> Result<Registration> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "name", &self.name, "Name is required");
        require_text(&mut errors, "email", &self.email, "Email is required");
        require_text(&mut errors, "phone", &self.phone, "Phone is required");
        require_text(&mut errors, "password", &self.password, "Password is required");
        errors.into_result()?;

        Ok(Registration {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
        })
    }
}

fn require_text(errors: &mut FieldErrors, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(field, message);
    }
}

/// Parses a non-zero number that fits `T`. Out-of-range input is as invalid as text.
fn positive<T>(errors: &mut FieldErrors, field: &'static str, value: &str, message: &str) -> Option<T>
where
    T: FromStr + Default + PartialEq,
{
    match value.trim().parse::<T>() {
        Ok(n) if n != T::default() => Some(n),
        _ => {
            errors.insert(field, message);
            None
        }
    }
}

fn count(errors: &mut FieldErrors, field: &'static str, value: &str) -> Option<u32> {
    value.trim().parse::<u32>().map_or_else(
        |_| {
            errors.insert(field, format!("Valid {field} count is required"));
            None
        },
        Some,
    )
}

fn listing_type(errors: &mut FieldErrors, value: &str) -> Option<ListingType> {
    let parsed = ListingType::parse(value);
    if parsed.is_none() {
        errors.insert("listing_type", "Listing type must be sale or rent");
    }
    parsed
}

fn image_or_default(image: &str) -> String {
    let image = image.trim();
    if image.is_empty() {
        DEFAULT_IMAGE.to_string()
    } else {
        image.to_string()
    }
}
