use async_trait::async_trait;
use burger_shop::console::{Console, ConsoleError, StreamConsole};
use burger_shop::lifecycle::{SessionConfig, SessionError, ShopSession};
use burger_shop::model::{Bread, Burger, BurgerKind, Meat, SelectionError, Shop, Veggie};
use burger_shop::recipe_registry::RecipeRegistry;

type MemoryConsole = StreamConsole<&'static [u8], Vec<u8>>;

fn session(input: &'static str) -> ShopSession<MemoryConsole> {
    let registry = RecipeRegistry::standard_menu().expect("standard menu has no duplicates");
    ShopSession::new(registry, StreamConsole::new(input.as_bytes(), Vec::new()))
}

fn transcript(session: ShopSession<MemoryConsole>) -> String {
    let (_, written) = session.into_console().into_parts();
    String::from_utf8(written).expect("console output is UTF-8")
}

/// Choosing Taipei then Chicken cooks the Taipei chicken burger and then quits.
#[tokio::test]
async fn test_taipei_chicken_end_to_end() {
    let mut session = session("Taipei\nChicken\nq\n");

    let served = session.run().await.expect("session should end on quit");
    assert_eq!(served, 1);

    let output = transcript(session);
    assert!(output.starts_with("Which shop do you like? (1)Taipei (2)NewYork (3)Tokyo: "));
    assert!(output.contains("What burger would you like? (1)Chicken (2)Pork: "));
    assert!(output.contains(
        "Cooking TaipeiChickenBurger...\n\
         \tBread used:WhiteBread\n\
         \tVeggie used:Tomato\n\
         \tMeat used:TaiwanChicken\n\
         Your TaipeiChickenBurger is ready. Enjoy it!\n"
    ));
    assert!(output.ends_with("Press 'Q' to quit or any other key to go on...\n"));
}

/// Tokyo only offers Chicken: Pork is a known kind but unacceptable there.
#[tokio::test]
async fn test_tokyo_pork_is_unacceptable() {
    let mut session = session("3\nPork\nq\n");

    let served = session.run().await.unwrap();
    assert_eq!(served, 0);

    let output = transcript(session);
    assert!(output.contains("What burger would you like? (1)Chicken: "));
    assert!(output.contains("Unacceptable BurgerKind(Pork)\n"));
    assert!(!output.contains("Cooking"));
}

#[tokio::test]
async fn test_take_order_reports_unacceptable_selection() {
    let mut session = session("Tokyo\nPork\n");

    let err = session.take_order().await.unwrap_err();
    assert!(matches!(
        err,
        SessionError::Selection(SelectionError::UnacceptableSelection { choice: "BurgerKind", .. })
    ));
    assert!(err.is_recoverable());
}

#[tokio::test]
async fn test_take_order_by_ordinals() {
    let mut session = session("2\n2\n");

    let burger = session.take_order().await.unwrap();
    assert_eq!(
        burger,
        Burger::new("NewYorkPorkBurger", Bread::WhiteBread, Veggie::Onion, Meat::Bacon)
    );
}

/// An unknown shop aborts the round before the burger prompt; the loop keeps going.
#[tokio::test]
async fn test_invalid_shop_is_reported_and_loop_continues() {
    let mut session = session("Mars\n\nTokyo\nChicken\nQ\n");

    let served = session.run().await.unwrap();
    assert_eq!(served, 1);

    let output = transcript(session);
    assert!(output.contains("Invalid Shop(Mars)\n"));
    assert!(output.contains("Your TokyoChickenBurger is ready. Enjoy it!"));
    assert_eq!(output.matches("What burger would you like?").count(), 1);
}

#[tokio::test]
async fn test_multiple_rounds_until_quit() {
    let mut session = session("1\n2\ngo\nNewYork\nChicken\n\nTaipei\nBeef\nq\n");

    let served = session.run().await.unwrap();
    assert_eq!(served, 2);

    let output = transcript(session);
    let pork = output.find("Your TaipeiPorkBurger is ready").unwrap();
    let chicken = output.find("Your NewYorkChickenBurger is ready").unwrap();
    assert!(pork < chicken);
    assert!(output.contains("Invalid BurgerKind(Beef)\n"));
    assert_eq!(output.matches("Press 'Q' to quit").count(), 3);
}

/// The quit key comes from the session config; other answers keep the loop alive.
#[tokio::test]
async fn test_custom_quit_key() {
    let registry = RecipeRegistry::standard_menu().unwrap();
    let console = StreamConsole::new("Mars\nq\nx\nX\n".as_bytes(), Vec::new());
    let mut session = ShopSession::with_config(registry, console, SessionConfig { quit_key: 'x' });

    let served = session.run().await.unwrap();
    assert_eq!(served, 0);

    let output = transcript(session);
    assert!(output.contains("Press 'x' to quit or any other key to go on..."));
    assert!(output.contains("Invalid Shop(Mars)\n"));
    assert!(output.contains("Invalid Shop(x)\n"));
}

/// A shop with no recipes offers nothing, so every kind is unacceptable there.
#[tokio::test]
async fn test_shop_without_recipes_offers_nothing() {
    let mut registry = RecipeRegistry::new();
    registry
        .register_recipe(Shop::Taipei, BurgerKind::Chicken, || {
            Burger::new(
                "TaipeiChickenBurger",
                Bread::WhiteBread,
                Veggie::Tomato,
                Meat::TaiwanChicken,
            )
        })
        .unwrap();
    let console = StreamConsole::new("Tokyo\nChicken\nq\n".as_bytes(), Vec::new());
    let mut session = ShopSession::new(registry, console);
    assert!(session.registry().defined_kinds(Shop::Tokyo).is_empty());

    assert_eq!(session.run().await.unwrap(), 0);

    let output = transcript(session);
    assert!(output.contains("What burger would you like? : "));
    assert!(output.contains("Unacceptable BurgerKind(Chicken)\n"));
}

/// Bytes that are not UTF-8 are rejected like any other unknown shop.
#[tokio::test]
async fn test_undecodable_input_is_an_invalid_selection() {
    let registry = RecipeRegistry::standard_menu().unwrap();
    let input: &'static [u8] = b"\xff\xfe\ngo\nTaipei\nChicken\nq\n";
    let mut session = ShopSession::new(registry, StreamConsole::new(input, Vec::new()));

    let served = session.run().await.expect("bad bytes must not end the session");
    assert_eq!(served, 1);

    let output = transcript(session);
    assert!(output.contains("Invalid Shop(\u{fffd}\u{fffd})\n"));
    assert!(output.contains("Your TaipeiChickenBurger is ready. Enjoy it!"));
}

/// Input running out mid-order is not recoverable and ends the session.
#[tokio::test]
async fn test_closed_input_ends_session() {
    let mut session = session("Taipei\n");

    let err = session.run().await.unwrap_err();
    assert!(matches!(err, SessionError::Console(ConsoleError::Closed)));
    assert!(!err.is_recoverable());
}

/// Console that fails every write, standing in for a broken terminal.
struct BrokenConsole;

#[async_trait]
impl Console for BrokenConsole {
    async fn write(&mut self, _text: &str) -> Result<(), ConsoleError> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed").into())
    }

    async fn read_line(&mut self) -> Result<String, ConsoleError> {
        Ok("Taipei".to_string())
    }
}

#[tokio::test]
async fn test_console_io_error_propagates() {
    let registry = RecipeRegistry::standard_menu().unwrap();
    let mut session = ShopSession::new(registry, BrokenConsole);

    let err = session.run().await.unwrap_err();
    match err {
        SessionError::Console(ConsoleError::Io(io)) => {
            assert_eq!(io.kind(), std::io::ErrorKind::BrokenPipe)
        }
        other => panic!("expected console I/O error, got {other:?}"),
    }
}
