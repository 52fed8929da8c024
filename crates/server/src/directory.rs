use shared_types::{AccountSeed, Profile, Session};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// One account known to the directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub password_hash: String,
    pub roles: Vec<String>,
}

impl From<AccountSeed> for Account {
    fn from(seed: AccountSeed) -> Self {
        Self {
            id: seed.id,
            email: seed.email.trim().to_string(),
            display_name: seed.display_name,
            password_hash: seed.password_hash,
            roles: seed.roles,
        }
    }
}

impl Account {
    pub fn session(&self) -> Session {
        Session::new(self.id.clone(), self.email.clone())
    }

    /// Profile for this account. Accounts without a display name have none.
    pub fn profile(&self) -> Option<Profile> {
        self.display_name.as_ref().map(|name| Profile {
            user_id: self.id.clone(),
            display_name: name.clone(),
        })
    }
}

/// Immutable, in-memory account store seeded from `config.toml`.
#[derive(Debug, Default)]
pub struct AccountDirectory {
    by_id: HashMap<String, Account>,
}

impl AccountDirectory {
    /// Build from seeds. Later entries with a duplicate id replace earlier
    /// ones.
    pub fn from_seeds(seeds: impl IntoIterator<Item = AccountSeed>) -> Self {
        let mut by_id = HashMap::new();
        for seed in seeds {
            let account = Account::from(seed);
            if by_id.insert(account.id.clone(), account).is_some() {
                tracing::warn!("Duplicate account id in config; keeping the last entry");
            }
        }
        Self { by_id }
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Account> {
        self.by_id.get(id)
    }

    /// Look up by email, ignoring ASCII case and surrounding whitespace.
    pub fn find_by_email(&self, email: &str) -> Option<&Account> {
        let email = email.trim();
        self.by_id
            .values()
            .find(|a| a.email.eq_ignore_ascii_case(email))
    }

    /// Role codes assigned to `id`, in configured order.
    pub fn roles(&self, id: &str) -> Option<&[String]> {
        self.get(id).map(|a| a.roles.as_slice())
    }
}

static DIRECTORY: OnceLock<Arc<AccountDirectory>> = OnceLock::new();

/// The process-wide directory used by server functions, built from the
/// loaded config on first use.
pub fn get_directory() -> Arc<AccountDirectory> {
    DIRECTORY
        .get_or_init(|| {
            let config = crate::config::app_config();
            Arc::new(AccountDirectory::from_seeds(config.accounts.clone()))
        })
        .clone()
}
