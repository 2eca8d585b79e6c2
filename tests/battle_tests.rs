//! Battle scenario tests.
//!
//! These drive battles with scripted draw sources and a recording sink, so
//! the exact sequence of plays, passes, and table cards can be asserted.

use skirmish::core::{AgentId, Card, GameRng, ScriptedDeck};
use skirmish::events::{Event, Recorder};
use skirmish::game::{Agent, Battle, BattleStatus};
use skirmish::strategy::Strategy;

fn agent_with_hand(id: u8, strategy: Strategy, ranks: &[u8]) -> Agent {
    let mut agent = Agent::new(AgentId::new(id), strategy);
    for &rank in ranks {
        agent.hand_mut().add(Card::new(rank));
    }
    agent
}

fn ids(ids: &[u8]) -> Vec<AgentId> {
    ids.iter().map(|&i| AgentId::new(i)).collect()
}

/// Two Lowest agents with hands [2,3] and [4,5]: the first plays its 2, the
/// second answers with its 4, and the battle continues on a table of 4.
#[test]
fn test_two_lowest_agents_exact_sequence() {
    let mut agents = vec![
        agent_with_hand(0, Strategy::Lowest, &[2, 3]),
        agent_with_hand(1, Strategy::Lowest, &[4, 5]),
    ];
    let mut deck = ScriptedDeck::new([Card::new(9)]);
    let mut rng = GameRng::new(0);
    let mut recorder = Recorder::new();
    let mut battle = Battle::new(ids(&[0, 1]));

    assert_eq!(battle.table(), None);

    battle.take_turn(&mut agents, &mut deck, &mut rng, &mut recorder);
    assert_eq!(battle.table(), Some(Card::new(2)));
    assert_eq!(agents[0].hand().len(), 1);

    battle.take_turn(&mut agents, &mut deck, &mut rng, &mut recorder);
    assert_eq!(battle.table(), Some(Card::new(4)));
    assert_eq!(agents[1].hand().len(), 1);
    assert_eq!(battle.status(), BattleStatus::Active);

    // Agent 0's remaining 3 cannot beat the 4: it passes, draws, and the
    // battle is over.
    battle.take_turn(&mut agents, &mut deck, &mut rng, &mut recorder);
    assert_eq!(agents[0].hand().len(), 2);
    assert_eq!(battle.status(), BattleStatus::Won(AgentId::new(1)));

    let events: Vec<Event> = recorder.events().iter().cloned().collect();
    assert_eq!(
        events,
        vec![
            Event::CardPlayed {
                agent: AgentId::new(0),
                card: Card::new(2)
            },
            Event::CardPlayed {
                agent: AgentId::new(1),
                card: Card::new(4)
            },
            Event::Passed {
                agent: AgentId::new(0),
                drew: Card::new(9)
            },
        ]
    );
}

/// An agent holding only a 5 against a table of 10 passes, ends up with two
/// cards, sits out the rest of the battle, and is back in the next one.
#[test]
fn test_pass_drops_out_and_reappears_next_battle() {
    let mut agents = vec![
        agent_with_hand(0, Strategy::Highest, &[2, 3, 10]),
        agent_with_hand(1, Strategy::Lowest, &[5]),
    ];
    let mut deck = ScriptedDeck::new([Card::new(9), Card::new(4)]);
    let mut rng = GameRng::new(0);
    let mut recorder = Recorder::new();

    let mut battle = Battle::new(ids(&[0, 1]));
    let result = battle.run(&mut agents, &mut deck, &mut rng, &mut recorder);

    // Agent 0 opened with its 10; agent 1 could not answer.
    assert_eq!(result.winner, AgentId::new(0));
    assert_eq!(result.game_winner, None);
    assert_eq!(agents[1].hand().len(), 2);

    // The lone survivor was declared winner without another turn: its hand
    // is untouched after the one play, and no event follows the pass other
    // than the battle result.
    assert_eq!(agents[0].hand().len(), 2);
    let events: Vec<Event> = recorder.events().iter().cloned().collect();
    assert_eq!(
        events,
        vec![
            Event::CardPlayed {
                agent: AgentId::new(0),
                card: Card::new(10)
            },
            Event::Passed {
                agent: AgentId::new(1),
                drew: Card::new(9)
            },
            Event::BattleWon {
                winner: AgentId::new(0)
            },
        ]
    );

    // Next battle: the full roster is back, and the passer gets to play.
    let mut battle = Battle::new(ids(&[0, 1]));
    assert_eq!(battle.active_agents(), &ids(&[0, 1])[..]);

    battle.take_turn(&mut agents, &mut deck, &mut rng, &mut recorder);
    assert_eq!(battle.table(), Some(Card::new(3)));

    battle.take_turn(&mut agents, &mut deck, &mut rng, &mut recorder);
    assert_eq!(battle.table(), Some(Card::new(5)));
    assert_eq!(agents[1].hand().len(), 1);
}

/// Removing a passing agent never skips the agent after it: the next turn
/// belongs to the agent that followed the passer in the original order.
#[test]
fn test_pass_removal_does_not_skip_the_next_agent() {
    let mut agents = vec![
        agent_with_hand(0, Strategy::Lowest, &[2, 9, 10]),
        agent_with_hand(1, Strategy::Lowest, &[2]),
        agent_with_hand(2, Strategy::Lowest, &[3, 4]),
    ];
    let mut deck = ScriptedDeck::new([Card::new(7), Card::new(8)]);
    let mut rng = GameRng::new(0);
    let mut recorder = Recorder::new();

    let result = Battle::new(ids(&[0, 1, 2])).run(&mut agents, &mut deck, &mut rng, &mut recorder);
    assert_eq!(result.winner, AgentId::new(0));

    let events: Vec<Event> = recorder.events().iter().cloned().collect();
    assert_eq!(
        events,
        vec![
            Event::CardPlayed {
                agent: AgentId::new(0),
                card: Card::new(2)
            },
            // Agent 1 cannot beat the 2 and passes out...
            Event::Passed {
                agent: AgentId::new(1),
                drew: Card::new(7)
            },
            // ...and the turn falls to agent 2, not back to agent 0.
            Event::CardPlayed {
                agent: AgentId::new(2),
                card: Card::new(3)
            },
            Event::CardPlayed {
                agent: AgentId::new(0),
                card: Card::new(9)
            },
            Event::Passed {
                agent: AgentId::new(2),
                drew: Card::new(8)
            },
            Event::BattleWon {
                winner: AgentId::new(0)
            },
        ]
    );
}

/// The table card never decreases within a battle, whatever the strategies
/// draw and play.
#[test]
fn test_table_cards_increase_within_every_battle() {
    use skirmish::core::WeightedDeck;
    use skirmish::game::Game;

    let mut game = Game::new(&[Strategy::Random, Strategy::Highest, Strategy::Lowest]);
    let mut rng = GameRng::new(42);
    let mut recorder = Recorder::new();

    game.play(&mut WeightedDeck, &mut rng, &mut recorder);

    let mut last_played: Option<Card> = None;
    for event in recorder.events() {
        match event {
            Event::BattleStarted { .. } => last_played = None,
            Event::CardPlayed { card, .. } => {
                if let Some(prev) = last_played {
                    assert!(*card > prev, "table card regressed within a battle");
                }
                last_played = Some(*card);
            }
            _ => {}
        }
    }
}
