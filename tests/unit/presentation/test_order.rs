use degiro_client::presentation::order::{Action, OrderType, TimeType};

#[test]
fn test_order_type_codes() {
    for (order_type, code) in [
        (OrderType::Limit, 0u8),
        (OrderType::StopLimit, 1),
        (OrderType::Market, 2),
        (OrderType::StopLoss, 3),
    ] {
        assert_eq!(u8::from(order_type), code);
        assert_eq!(OrderType::try_from(code).unwrap(), order_type);
    }
    assert!(OrderType::try_from(4).is_err());
}

#[test]
fn test_order_type_requirements() {
    assert!(OrderType::Limit.requires_price());
    assert!(!OrderType::Limit.requires_stop_price());
    assert!(OrderType::StopLimit.requires_price());
    assert!(OrderType::StopLimit.requires_stop_price());
    assert!(!OrderType::Market.requires_price());
    assert!(OrderType::StopLoss.requires_stop_price());
}

#[test]
fn test_time_type_codes() {
    assert_eq!(u8::from(TimeType::GoodTillDay), 1);
    assert_eq!(u8::from(TimeType::GoodTillCanceled), 3);
    assert!(TimeType::try_from(2).is_err());
    assert_eq!(
        serde_json::from_str::<TimeType>("3").unwrap(),
        TimeType::GoodTillCanceled
    );
}

#[test]
fn test_display_names() {
    assert_eq!(OrderType::StopLoss.to_string(), "STOP_LOSS");
    assert_eq!(TimeType::GoodTillDay.to_string(), "GOOD_TILL_DAY");
    assert_eq!(serde_json::to_string(&Action::Sell).unwrap(), "\"SELL\"");
}

#[test]
fn test_defaults() {
    assert_eq!(Action::default(), Action::Buy);
    assert_eq!(OrderType::default(), OrderType::Limit);
    assert_eq!(TimeType::default(), TimeType::GoodTillDay);
}
