use actor_framework::mock::MockClient;
use actor_framework::{ActorClient, FrameworkError};
use chrono::Duration;
use heladeria::catalog;
use heladeria::clients::OrderClient;
use heladeria::model::{
    CartItem, CustomerInfo, Order, OrderCreate, OrderFilter, OrderId, OrderStatus,
    PaymentMethod,
};
use heladeria::order_actor::{self, OrderActionResult, OrderError};

fn submission() -> OrderCreate {
    let products = catalog::products();
    OrderCreate {
        customer_info: CustomerInfo {
            first_name: "Valentina".into(),
            last_name: "Romero".into(),
            email: "valen@example.com".into(),
            phone: "3794123456".into(),
            address: "San Martín 850".into(),
            city: "Corrientes".into(),
            notes: Some("Timbre 2".into()),
            ..Default::default()
        },
        items: vec![
            CartItem {
                product: products[0].clone(),
                quantity: 4,
                selected_flavor: Some("Limón".into()),
            },
            CartItem {
                product: products[8].clone(),
                quantity: 1,
                selected_flavor: None,
            },
        ],
        payment_method: PaymentMethod::Card {
            details: Some("Débito".into()),
        },
        total: 6200,
    }
}

fn spawn_order_actor() -> (OrderClient, tokio::task::JoinHandle<()>) {
    let (actor, client) = order_actor::new(16);
    let handle = tokio::spawn(actor.run(()));
    (OrderClient::new(client), handle)
}

/// Real Order actor: a valid submission is stored and comes back unchanged.
#[tokio::test]
async fn test_submit_then_lookup_returns_same_order() {
    let (orders, handle) = spawn_order_actor();

    let submitted = orders.submit_order(submission()).await.unwrap();
    assert!(submitted.id.0.starts_with("ORD-"));
    assert_eq!(submitted.status, OrderStatus::Pending);
    assert_eq!(submitted.shipping, 0);
    assert_eq!(submitted.subtotal, 6200);
    assert_eq!(
        submitted.estimated_delivery,
        Some(submitted.created_at + Duration::hours(2))
    );

    let found = orders.find_order(submitted.id.clone()).await.unwrap();
    assert_eq!(found, submitted);

    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_each_missing_contact_field_is_rejected() {
    let (orders, _handle) = spawn_order_actor();

    let blanks: [fn(&mut CustomerInfo); 4] = [
        |c| c.first_name.clear(),
        |c| c.last_name.clear(),
        |c| c.email.clear(),
        |c| c.phone.clear(),
    ];
    for blank in blanks {
        let mut params = submission();
        blank(&mut params.customer_info);
        let result = orders.submit_order(params).await;
        assert!(
            matches!(result, Err(OrderError::Validation(ref msg)) if msg.contains("Incomplete customer information")),
            "{result:?}"
        );
    }

    // Address and city are not checked here
    let mut params = submission();
    params.customer_info.address.clear();
    params.customer_info.city.clear();
    assert!(orders.submit_order(params).await.is_ok());

    // Whitespace is a value, not a blank
    let mut params = submission();
    params.customer_info.first_name = "  ".into();
    let stored = orders.submit_order(params).await.unwrap();
    assert_eq!(stored.customer_info.first_name, "  ");

    assert_eq!(orders.list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_empty_item_list_is_rejected() {
    let (orders, _handle) = spawn_order_actor();

    let mut params = submission();
    params.items.clear();
    assert_eq!(
        orders.submit_order(params).await,
        Err(OrderError::Validation("Order has no items".into()))
    );
    assert!(orders.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_total_is_taken_as_submitted() {
    let (orders, _handle) = spawn_order_actor();

    let mut params = submission();
    params.total = -15;
    let order = orders.submit_order(params).await.unwrap();
    assert_eq!(order.total, -15);
    assert_eq!(order.subtotal, -15);
}

#[tokio::test]
async fn test_unknown_order_is_not_found() {
    let (orders, _handle) = spawn_order_actor();

    let missing = OrderId::from("ORD-0-nothing00");
    assert_eq!(
        orders.find_order(missing.clone()).await,
        Err(OrderError::NotFound("ORD-0-nothing00".into()))
    );
    assert_eq!(
        orders
            .request_status_change(missing, OrderStatus::Ready)
            .await
            .unwrap_err(),
        OrderError::NotFound("ORD-0-nothing00".into())
    );
}

#[tokio::test]
async fn test_status_change_request_leaves_order_untouched() {
    let (orders, _handle) = spawn_order_actor();
    let order = orders.submit_order(submission()).await.unwrap();

    let returned = orders
        .request_status_change(order.id.clone(), OrderStatus::Delivered)
        .await
        .unwrap();
    assert_eq!(returned.status, OrderStatus::Pending);
    assert_eq!(orders.find_order(order.id).await.unwrap(), returned);
}

#[tokio::test]
async fn test_orders_reject_updates() {
    let (actor, client) = order_actor::new(16);
    tokio::spawn(actor.run(()));
    let orders = OrderClient::new(client.clone());
    let order = orders.submit_order(submission()).await.unwrap();

    match client.update(order.id.clone(), ()).await {
        Err(FrameworkError::EntityError(inner)) => {
            assert_eq!(
                inner.downcast_ref::<OrderError>(),
                Some(&OrderError::Immutable(order.id.to_string()))
            );
        }
        other => panic!("expected entity error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_concurrent_submissions_are_all_stored() {
    let (orders, _handle) = spawn_order_actor();

    let mut tasks = Vec::new();
    for i in 0..40 {
        let orders = orders.clone();
        tasks.push(tokio::spawn(async move {
            let mut params = submission();
            params.customer_info.email = format!("cliente{i}@example.com");
            orders.submit_order(params).await
        }));
    }
    let mut ids = Vec::new();
    for task in tasks {
        ids.push(task.await.unwrap().unwrap().id);
    }

    let stored: Vec<OrderId> = orders.list().await.unwrap().into_iter().map(|o| o.id).collect();
    assert_eq!(stored.len(), 40);
    for id in &ids {
        assert!(stored.contains(id));
    }
}

// --- OrderClient against a mocked actor ---

fn stored_order(id: &str, first_name: &str, status: OrderStatus) -> Order {
    let mut params = submission();
    params.customer_info.first_name = first_name.into();
    let mut order = Order::new(OrderId::from(id), params, chrono::Utc::now());
    order.status = status;
    order
}

#[tokio::test]
async fn test_search_filters_listed_orders() {
    let mut mock = MockClient::<Order>::new();
    mock.expect_list().return_ok(vec![
        stored_order("ORD-1-aaaaaaaaa", "Valentina", OrderStatus::Pending),
        stored_order("ORD-2-bbbbbbbbb", "Joaquín", OrderStatus::Delivered),
        stored_order("ORD-3-ccccccccc", "Joaquina", OrderStatus::Pending),
    ]);

    let orders = OrderClient::new(mock.client());
    let filter = OrderFilter {
        status: Some(OrderStatus::Pending),
        term: Some("joaq".into()),
    };
    let found = orders.search_orders(&filter).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, OrderId::from("ORD-3-ccccccccc"));
    mock.verify();
}

#[tokio::test]
async fn test_summary_counts_buckets() {
    let mut mock = MockClient::<Order>::new();
    mock.expect_list().return_ok(vec![
        stored_order("ORD-1-a", "A", OrderStatus::Confirmed),
        stored_order("ORD-2-b", "B", OrderStatus::Preparing),
        stored_order("ORD-3-c", "C", OrderStatus::Cancelled),
    ]);

    let summary = OrderClient::new(mock.client()).summary().await.unwrap();
    assert_eq!(summary.total, 3);
    assert_eq!(summary.awaiting, 1);
    assert_eq!(summary.in_preparation, 1);
    assert_eq!(summary.delivered, 0);
    assert_eq!(summary.cancelled, 1);
    mock.verify();
}

#[tokio::test]
async fn test_rejected_submission_keeps_entity_error() {
    let mut mock = MockClient::<Order>::new();
    mock.expect_create()
        .return_err(FrameworkError::EntityError(Box::new(OrderError::Validation(
            "Order has no items".into(),
        ))));

    let result = OrderClient::new(mock.client()).submit_order(submission()).await;
    assert_eq!(result, Err(OrderError::Validation("Order has no items".into())));
    mock.verify();
}

#[tokio::test]
async fn test_status_change_result_is_unwrapped() {
    let order = stored_order("ORD-9-zzzzzzzzz", "Valentina", OrderStatus::Ready);
    let mut mock = MockClient::<Order>::new();
    mock.expect_action(order.id.clone())
        .return_ok(OrderActionResult::RequestStatusChange(order.clone()));

    let returned = OrderClient::new(mock.client())
        .request_status_change(order.id.clone(), OrderStatus::Delivered)
        .await
        .unwrap();
    assert_eq!(returned, order);
    mock.verify();
}
