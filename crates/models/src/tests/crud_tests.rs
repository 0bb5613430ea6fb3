use super::setup_test_db;
use crate::{book, category, tag, tag_link, ModuleType};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set};
use anyhow::Result;
use chrono::Utc;

/// Test category create and module scoping
#[tokio::test]
async fn test_category_crud() -> Result<()> {
    let db = setup_test_db().await?;

    let root = category::create(&db, "Tech", ModuleType::Book, 0, 1).await?;
    let child = category::create(&db, " Rust ", ModuleType::Book, root.id, 2).await?;
    assert_eq!(child.name, "Rust");
    assert_eq!(child.parent_id, root.id);
    category::create(&db, "Essays", ModuleType::Article, 0, 1).await?;

    let books = category::Entity::find()
        .filter(category::Column::ModuleType.eq(ModuleType::Book))
        .order_by_asc(category::Column::Id)
        .all(&db)
        .await?;
    assert_eq!(books.len(), 2);
    assert!(books.iter().all(|c| c.module_type == ModuleType::Book));
    Ok(())
}

/// A parent must exist and share the module
#[tokio::test]
async fn test_category_parent_rules() -> Result<()> {
    let db = setup_test_db().await?;

    let article_root = category::create(&db, "Essays", ModuleType::Article, 0, 1).await?;
    assert!(category::create(&db, "Rust", ModuleType::Book, article_root.id, 1).await.is_err());
    assert!(category::create(&db, "Orphan", ModuleType::Book, 999, 1).await.is_err());
    assert!(category::create(&db, "   ", ModuleType::Book, 0, 1).await.is_err());
    Ok(())
}

/// Test book row insert, update and delete
#[tokio::test]
async fn test_book_crud() -> Result<()> {
    let db = setup_test_db().await?;
    let now = Utc::now();

    let created = book::ActiveModel {
        title: Set("The Rust Programming Language".to_string()),
        description: Set(None),
        author: Set("Steve Klabnik".to_string()),
        publisher: Set(Some("No Starch Press".to_string())),
        publish_date: Set(None),
        cover: Set(None),
        category_id: Set("1,2".to_string()),
        recommend: Set(true),
        publish: Set(false),
        read_num: Set(0),
        like_num: Set(0),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    assert!(created.id > 0);

    let mut am: book::ActiveModel = created.clone().into();
    am.publish = Set(true);
    let updated = am.update(&db).await?;
    assert!(updated.publish);
    assert_eq!(updated.title, created.title);

    updated.delete(&db).await?;
    assert!(book::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

/// Tag links follow the tag relation
#[tokio::test]
async fn test_tag_link_relation() -> Result<()> {
    let db = setup_test_db().await?;

    let rust = tag::ActiveModel { name: Set("rust".into()), module_type: Set(ModuleType::Book), ..Default::default() }
        .insert(&db)
        .await?;
    tag_link::ActiveModel { link_id: Set(7), tag_id: Set(rust.id), module_type: Set(ModuleType::Book), ..Default::default() }
        .insert(&db)
        .await?;

    let links = rust.find_related(tag_link::Entity).all(&db).await?;
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].link_id, 7);

    let with_tag = tag_link::Entity::find()
        .find_also_related(tag::Entity)
        .all(&db)
        .await?;
    assert_eq!(with_tag[0].1.as_ref().map(|t| t.name.as_str()), Some("rust"));
    Ok(())
}
