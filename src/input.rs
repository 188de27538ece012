//! Typed command parser.
//!
//! Maps one line of terminal input to the events it stands for. Form
//! commands (`ad`, `set`, `signup`) take `field=value` pairs where a value
//! runs until the next `field=` token, so values may contain spaces:
//!
//! ```text
//! ad title=Garden Cottage price=320000 location=Kandy, Sri Lanka
//! ```

use crate::app::modes::{AdminTab, AuthMode, Page};
use crate::app::Event;
use crate::domain::{CeylandError, ListingId, RegistrationForm, Result};

pub const HELP: &str = "\
Browsing:
  go <page>            home, rentals, houses, commercial, apartments, villas,
                       all, buy, sell
  type <kind>          category shortcut (lands on home)
  where <text>         location / keyword filter
  kind <type>          property type filter (or 'all')
  price <range>        price bracket, e.g. 500000-1000000, 3000+, all
  beds <n> | baths <n> minimum rooms (or 'any')
  search               apply the home search form
  clear                reset the current page's filters
  sort <key>           newest, price-low, price-high, beds, featured
Account:
  login [email password]   signup [name=.. email=.. phone=.. password=..]
  logout                   admin [email password]
Posting:
  post                 open the post-ad form
  ad field=value ...   fill the form (title, price, location, bedrooms,
                       bathrooms, area, type, listing_type, description,
                       image, contact_name, contact_email, contact_phone)
  submit               submit the ad
Back-office:
  tab <properties|users|settings>   find <text>   new   edit <id>
  set field=value ...  save   delete <id>
Other:
  close   help   quit";

/// What a line of input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Empty,
    Help,
    Events(Vec<Event>),
}

impl From<Event> for Command {
    fn from(event: Event) -> Self {
        Self::Events(vec![event])
    }
}

fn usage(text: &str) -> CeylandError {
    CeylandError::UnknownCommand(format!("usage: {text}"))
}

fn required<'a>(arg: &'a str, text: &str) -> Result<&'a str> {
    if arg.is_empty() {
        Err(usage(text))
    } else {
        Ok(arg)
    }
}

fn listing_id(arg: &str, text: &str) -> Result<ListingId> {
    arg.parse().map_err(|_| usage(text))
}

/// Splits `field=value` pairs. Words without `=` extend the previous value.
fn pairs(args: &str) -> Vec<(String, String)> {
    let mut out: Vec<(String, String)> = Vec::new();
    for word in args.split_whitespace() {
        match word.split_once('=') {
            Some((field, value)) if !field.is_empty() => out.push((field.to_string(), value.to_string())),
            _ => {
                if let Some((_, value)) = out.last_mut() {
                    if !value.is_empty() {
                        value.push(' ');
                    }
                    value.push_str(word);
                }
            }
        }
    }
    out
}

fn credentials(args: &str) -> (String, String) {
    let mut words = args.split_whitespace();
    let email = words.next().unwrap_or_default().to_string();
    let password = words.next().unwrap_or_default().to_string();
    (email, password)
}

/// Parses one input line.
///
/// # Errors
///
/// Returns [`CeylandError::UnknownCommand`] for an unknown verb or missing
/// argument, and [`CeylandError::UnknownPage`] for an unknown page or tab.
pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    let (verb, args) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let args = args.trim();

    let event = match verb.to_lowercase().as_str() {
        "" => return Ok(Command::Empty),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" | "q" => Event::Quit,

        "go" => Event::Navigate(Page::parse(required(args, "go <page>")?)?),
        "type" => Event::ShortcutType(required(args, "type <kind>")?.to_string()),
        "where" => Event::SetLocation(args.to_string()),
        "kind" => Event::SetPropertyType(required(args, "kind <type>")?.to_string()),
        "price" => Event::SetPrice(required(args, "price <range>")?.to_string()),
        "beds" => Event::SetMinBedrooms(required(args, "beds <n>")?.to_string()),
        "baths" => Event::SetMinBathrooms(required(args, "baths <n>")?.to_string()),
        "search" => Event::ApplySearch,
        "clear" => Event::ClearFilters,
        "sort" => Event::SetSort(required(args, "sort <key>")?.to_string()),

        "login" if args.is_empty() => Event::OpenAuth(AuthMode::Login),
        "login" => {
            let (email, password) = credentials(args);
            Event::Login { email, password }
        }
        "signup" | "register" if args.is_empty() => Event::OpenAuth(AuthMode::Register),
        "signup" | "register" => {
            let mut form = RegistrationForm::default();
            for (field, value) in pairs(args) {
                match field.as_str() {
                    "name" => form.name = value,
                    "email" => form.email = value,
                    "phone" => form.phone = value,
                    "password" => form.password = value,
                    _ => return Err(CeylandError::UnknownCommand(format!("unknown signup field '{field}'"))),
                }
            }
            Event::Register(form)
        }
        "logout" => Event::Logout,
        "admin" if args.is_empty() => Event::OpenAdminLogin,
        "admin" => {
            let (email, password) = credentials(args);
            Event::AdminLogin { email, password }
        }

        "post" => Event::OpenPostAd,
        "ad" => {
            let fields = pairs(required(args, "ad field=value ...")?);
            return Ok(Command::Events(
                fields
                    .into_iter()
                    .map(|(field, value)| Event::SetAdField { field, value })
                    .collect(),
            ));
        }
        "submit" => Event::SubmitAd,
        "close" => Event::CloseModal,

        "tab" => Event::SelectAdminTab(AdminTab::parse(required(args, "tab <properties|users|settings>")?)?),
        "find" => Event::AdminSearch(args.to_string()),
        "new" => Event::OpenEditor(None),
        "edit" => Event::OpenEditor(Some(listing_id(args, "edit <id>")?)),
        "set" => {
            let fields = pairs(required(args, "set field=value ...")?);
            return Ok(Command::Events(
                fields
                    .into_iter()
                    .map(|(field, value)| Event::SetEditorField { field, value })
                    .collect(),
            ));
        }
        "save" => Event::SaveListing,
        "delete" => Event::DeleteListing(listing_id(args, "delete <id>")?),

        other => return Err(CeylandError::UnknownCommand(other.to_string())),
    };

    Ok(event.into())
}
