use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::value_objects::Email;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub favorite_products: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Account data that may leave the service. Never carries the password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub favorite_products: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: String, email: Email, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::generate(),
            name,
            email: email.into_inner(),
            password_hash,
            favorite_products: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: UserId,
        name: String,
        email: String,
        password_hash: String,
        favorite_products: Vec<Uuid>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
            favorite_products,
            created_at,
            updated_at,
        }
    }

    /// Adds the product to the favorites, or removes it when already present.
    /// Returns `true` when the product is a favorite afterwards.
    pub fn toggle_favorite(&mut self, product_id: Uuid) -> bool {
        let now_favorite = match self.favorite_products.iter().position(|id| *id == product_id) {
            Some(index) => {
                self.favorite_products.remove(index);
                false
            }
            None => {
                self.favorite_products.push(product_id);
                true
            }
        };
        self.updated_at = Utc::now();
        now_favorite
    }

    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            favorite_products: self.favorite_products.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            favorite_products: user.favorite_products,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn make_user(favorites: Vec<Uuid>) -> User {
        let mut user = User::new(
            "Ann".to_string(),
            Email::parse("ann@x.com").unwrap(),
            "$argon2id$hash".to_string(),
        );
        user.favorite_products = favorites;
        user
    }

    #[test]
    fn should_start_without_favorites() {
        let user = make_user(vec![]);
        assert!(user.favorite_products.is_empty());
    }

    #[test]
    fn should_append_product_when_not_favorite() {
        let existing = Uuid::new_v4();
        let added = Uuid::new_v4();
        let mut user = make_user(vec![existing]);

        let is_favorite = user.toggle_favorite(added);

        assert!(is_favorite);
        assert_eq!(user.favorite_products, vec![existing, added]);
    }

    #[test]
    fn should_remove_product_when_already_favorite() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let mut user = make_user(vec![first, second]);

        let is_favorite = user.toggle_favorite(first);

        assert!(!is_favorite);
        assert_eq!(user.favorite_products, vec![second]);
    }

    #[test]
    fn should_drop_password_hash_from_public_view() {
        let user = make_user(vec![]);
        let public = user.to_public();

        assert_eq!(public.id, user.id);
        assert_eq!(public.email, "ann@x.com");
    }

    proptest! {
        #[test]
        fn toggling_twice_restores_favorites(
            seeds in proptest::collection::vec(any::<u128>(), 0..8),
            pick in any::<prop::sample::Index>(),
            fresh in any::<bool>(),
        ) {
            let mut favorites: Vec<Uuid> = Vec::new();
            for seed in seeds {
                let id = Uuid::from_u128(seed);
                if !favorites.contains(&id) {
                    favorites.push(id);
                }
            }
            let target = if fresh || favorites.is_empty() {
                Uuid::new_v4()
            } else {
                favorites[pick.index(favorites.len())]
            };
            let mut user = make_user(favorites.clone());

            user.toggle_favorite(target);
            user.toggle_favorite(target);

            let mut restored = user.favorite_products.clone();
            let mut original = favorites;
            restored.sort();
            original.sort();
            prop_assert_eq!(restored, original);
        }
    }
}
