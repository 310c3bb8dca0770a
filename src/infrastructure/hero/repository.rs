//! In-memory hero repository implementation

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::pagination::PageRequest;
use crate::domain::{DomainError, Hero, HeroId, HeroRepository, NewHero, TeamId};
use crate::infrastructure::storage::{HeroRow, InMemoryDatabase, Tables};

/// Hero repository over the shared in-memory database
#[derive(Debug, Clone)]
pub struct InMemoryHeroRepository {
    db: Arc<InMemoryDatabase>,
}

impl InMemoryHeroRepository {
    pub fn new(db: Arc<InMemoryDatabase>) -> Self {
        Self { db }
    }
}

fn join_page(
    tables: &Tables,
    rows: Vec<&HeroRow>,
    page: PageRequest,
) -> Result<Vec<Hero>, DomainError> {
    page.apply(rows).into_iter().map(|row| tables.hero(row)).collect()
}

#[async_trait]
impl HeroRepository for InMemoryHeroRepository {
    async fn get(&self, id: HeroId) -> Result<Option<Hero>, DomainError> {
        let tables = self.db.read()?;

        tables
            .heroes
            .get(&id.value())
            .map(|row| tables.hero(row))
            .transpose()
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Hero>, DomainError> {
        let tables = self.db.read()?;

        tables
            .heroes
            .values()
            .find(|row| row.name == name)
            .map(|row| tables.hero(row))
            .transpose()
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError> {
        Ok(self.db.read()?.heroes.values().any(|row| row.name == name))
    }

    async fn create(&self, hero: NewHero) -> Result<Hero, DomainError> {
        let mut tables = self.db.write()?;

        let team_id = hero.team.id().value();
        if !tables.teams.contains_key(&team_id) {
            return Err(DomainError::storage(format!(
                "Cannot insert hero: team {} does not exist",
                team_id
            )));
        }

        let id = tables.next_hero_id();
        let hero = hero.into_hero(HeroId::new(id), Utc::now());
        tables.heroes.insert(
            id,
            HeroRow {
                id,
                name: hero.name().to_string(),
                description: hero.description().map(String::from),
                primary_power: hero.primary_power().map(String::from),
                level: hero.level(),
                team_id,
                created_at: hero.created_at(),
            },
        );

        Ok(hero)
    }

    async fn update(&self, hero: &Hero) -> Result<Option<Hero>, DomainError> {
        let mut tables = self.db.write()?;

        let team_id = hero.team_id().value();
        if !tables.teams.contains_key(&team_id) {
            return Err(DomainError::storage(format!(
                "Cannot update hero: team {} does not exist",
                team_id
            )));
        }

        let Some(row) = tables.heroes.get_mut(&hero.id().value()) else {
            return Ok(None);
        };

        row.name = hero.name().to_string();
        row.description = hero.description().map(String::from);
        row.primary_power = hero.primary_power().map(String::from);
        row.level = hero.level();
        row.team_id = team_id;

        let row = row.clone();
        tables.hero(&row).map(Some)
    }

    async fn delete(&self, id: HeroId) -> Result<bool, DomainError> {
        Ok(self.db.write()?.heroes.remove(&id.value()).is_some())
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Hero>, DomainError> {
        let tables = self.db.read()?;
        join_page(&tables, tables.heroes_newest_first(|_| true), page)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.db.read()?.heroes.len())
    }

    async fn list_by_team(
        &self,
        team_id: TeamId,
        page: PageRequest,
    ) -> Result<Vec<Hero>, DomainError> {
        let tables = self.db.read()?;
        let rows = tables.heroes_newest_first(|row| row.team_id == team_id.value());
        join_page(&tables, rows, page)
    }

    async fn count_by_team(&self, team_id: TeamId) -> Result<usize, DomainError> {
        Ok(self
            .db
            .read()?
            .heroes
            .values()
            .filter(|row| row.team_id == team_id.value())
            .count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewTeam, Team, TeamRepository};
    use crate::infrastructure::team::InMemoryTeamRepository;

    struct Fixture {
        teams: InMemoryTeamRepository,
        heroes: InMemoryHeroRepository,
    }

    fn fixture() -> Fixture {
        let db = Arc::new(InMemoryDatabase::new());
        Fixture {
            teams: InMemoryTeamRepository::new(db.clone()),
            heroes: InMemoryHeroRepository::new(db),
        }
    }

    async fn team(f: &Fixture, name: &str) -> Team {
        f.teams.create(NewTeam::new(name).unwrap()).await.unwrap()
    }

    async fn hero(f: &Fixture, name: &str, team: &Team) -> Hero {
        f.heroes
            .create(NewHero::new(name, team.clone()))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get_joins_team() {
        let f = fixture();
        let league = team(&f, "Justice League").await;

        let created = f
            .heroes
            .create(
                NewHero::new("Superman", league.clone())
                    .with_level(95)
                    .with_primary_power(Some("Super fuerza".into())),
            )
            .await
            .unwrap();
        assert_eq!(created.id().value(), 1);

        let stored = f.heroes.get(created.id()).await.unwrap().unwrap();
        assert_eq!(stored, created);
        assert_eq!(stored.team().name(), "Justice League");
    }

    #[tokio::test]
    async fn test_create_rejects_missing_team() {
        let f = fixture();
        let ghost = NewTeam::new("Ghost")
            .unwrap()
            .into_team(TeamId::new(999), Utc::now());

        let err = f.heroes.create(NewHero::new("Nobody", ghost)).await.unwrap_err();
        assert!(matches!(err, DomainError::Storage { .. }));
    }

    #[tokio::test]
    async fn test_reads_reflect_team_rename() {
        let f = fixture();
        let mut league = team(&f, "Justice League").await;
        let superman = hero(&f, "Superman", &league).await;

        league.set_name("JLA").unwrap();
        f.teams.update(&league).await.unwrap();

        let stored = f.heroes.get_by_name("Superman").await.unwrap().unwrap();
        assert_eq!(stored.id(), superman.id());
        assert_eq!(stored.team().name(), "JLA");
    }

    #[tokio::test]
    async fn test_update_moves_team() {
        let f = fixture();
        let league = team(&f, "Justice League").await;
        let titans = team(&f, "Teen Titans").await;
        let mut robin = hero(&f, "Robin", &league).await;

        robin.set_team(titans.clone());
        robin.set_level(40);
        let updated = f.heroes.update(&robin).await.unwrap().unwrap();

        assert_eq!(updated.team_id(), titans.id());
        assert_eq!(updated.level(), 40);
        assert_eq!(f.heroes.count_by_team(league.id()).await.unwrap(), 0);
        assert_eq!(f.heroes.count_by_team(titans.id()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_by_team() {
        let f = fixture();
        let league = team(&f, "Justice League").await;
        let titans = team(&f, "Teen Titans").await;
        hero(&f, "Superman", &league).await;
        hero(&f, "Robin", &titans).await;
        hero(&f, "Batman", &league).await;

        let page = f
            .heroes
            .list_by_team(league.id(), PageRequest::default())
            .await
            .unwrap();
        let names: Vec<&str> = page.iter().map(|h| h.name()).collect();
        assert_eq!(names, vec!["Batman", "Superman"]);

        let all = f.heroes.list(PageRequest::new(0, 2).unwrap()).await.unwrap();
        let names: Vec<&str> = all.iter().map(|h| h.name()).collect();
        assert_eq!(names, vec!["Batman", "Robin"]);
        assert_eq!(f.heroes.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_delete_leaves_team_and_siblings() {
        let f = fixture();
        let league = team(&f, "Justice League").await;
        let superman = hero(&f, "Superman", &league).await;
        hero(&f, "Batman", &league).await;

        assert!(f.heroes.delete(superman.id()).await.unwrap());
        assert!(!f.heroes.delete(superman.id()).await.unwrap());
        assert!(f.teams.get(league.id()).await.unwrap().is_some());
        assert!(f.heroes.exists_by_name("Batman").await.unwrap());
    }

    #[tokio::test]
    async fn test_team_delete_cascades() {
        let f = fixture();
        let league = team(&f, "Justice League").await;
        let superman = hero(&f, "Superman", &league).await;

        assert!(f.teams.delete(league.id()).await.unwrap());
        assert!(f.heroes.get(superman.id()).await.unwrap().is_none());
        assert_eq!(f.heroes.count().await.unwrap(), 0);
    }
}
