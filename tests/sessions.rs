mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{engine, names, FakeGenerator, FakeGeocoder, KOLKATA_DELHI};
use enroute::api::DynAPI;
use enroute::entities::{PlacesView, Trip};
use enroute::session::{PlacesSession, SessionRegistry};
use tokio::sync::watch;
use tokio::time::timeout;

fn api(geocoder: FakeGeocoder) -> DynAPI {
    Arc::new(engine(Arc::new(geocoder), FakeGenerator::Failing)) as DynAPI
}

async fn settled(rx: &mut watch::Receiver<PlacesView>) -> PlacesView {
    timeout(Duration::from_secs(5), async {
        loop {
            if !rx.borrow().is_loading {
                return rx.borrow().clone();
            }
            rx.changed().await.unwrap();
        }
    })
    .await
    .unwrap()
}

#[tokio::test]
async fn submit_publishes_loading_then_result() {
    let session = PlacesSession::new(api(FakeGeocoder::india()));

    session.submit(Trip::new("Kolkata", "Delhi")).await;
    let mut rx = session.subscribe();
    let view = settled(&mut rx).await;

    assert_eq!(view.error, None);
    assert_eq!(names(&view.places), KOLKATA_DELHI);
}

#[tokio::test]
async fn superseded_run_never_publishes() {
    let geocoder = FakeGeocoder::india().with_delay("mumbai", Duration::from_millis(200));
    let session = PlacesSession::new(api(geocoder));

    session.submit(Trip::new("Mumbai", "Delhi")).await;
    assert!(session.current().is_loading);

    session.submit(Trip::new("Kolkata", "Delhi")).await;
    let mut rx = session.subscribe();
    let view = settled(&mut rx).await;
    assert_eq!(names(&view.places), KOLKATA_DELHI);

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(names(&session.current().places), KOLKATA_DELHI);
}

#[tokio::test]
async fn failed_run_clears_places() {
    let session = PlacesSession::new(api(FakeGeocoder::india()));

    session.submit(Trip::new("Kolkata", "Delhi")).await;
    settled(&mut session.subscribe()).await;

    session.submit(Trip::new("Kolkata", "Atlantis")).await;
    let mut rx = session.subscribe();
    let view = settled(&mut rx).await;

    assert_eq!(view.error.as_deref(), Some("Could not locate Atlantis"));
    assert!(view.places.is_empty());
}

#[tokio::test]
async fn registry_finds_created_sessions_only() {
    let registry = SessionRegistry::default();
    let session = registry.create(api(FakeGeocoder::india())).await;

    assert_eq!(registry.find(session.id).await.unwrap().id, session.id);
    assert_eq!(registry.find(uuid::Uuid::new_v4()).await.unwrap_err().code, 100);
}

#[tokio::test]
async fn removed_session_is_gone_and_its_run_never_publishes() {
    let registry = SessionRegistry::default();
    let geocoder = FakeGeocoder::india().with_delay("delhi", Duration::from_millis(200));
    let session = registry.create(api(geocoder)).await;

    session.submit(Trip::new("Kolkata", "Delhi")).await;
    let rx = session.subscribe();

    registry.remove(session.id).await.unwrap();

    assert_eq!(registry.find(session.id).await.unwrap_err().code, 100);
    assert_eq!(registry.remove(session.id).await.unwrap_err().code, 100);

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert!(rx.borrow().is_loading);
    assert!(!rx.has_changed().unwrap());
}
