//! The agent and its per-tick decision cycle.
//!
//! One call to [`Agent::tick`] runs the fixed sequence:
//!
//! 1. decrement the competitive cooldown
//! 2. perceive the visible places
//! 3. drain the inbox, queueing replies
//! 4. prune remembered client locations that turned out empty
//! 5. send client locations and assist requests
//! 6. arbitrate the mode
//! 7. pursue the desire through the mode's plan
//! 8. recompute the visible places from wherever the agent ended up
//!
//! Messages produced along the way are returned as the tick's outbox; the
//! driver delivers them before the next agent runs.

use std::collections::VecDeque;

use taxi_core::{AgentId, AgentKey, PlaceId, SimRng, Team};
use taxi_grid::{Grid, Occupant, Path, RouteQuery};
use tracing::{debug, info, trace};

use crate::intention::plan_for;
use crate::{
    Action, ActionResult, AgentError, AgentResult, Belief, Intention, IntentionKind, Message,
    MessageKind, Mode, TickContext,
};

/// Consecutive successful obstruction rounds before an agent gives up.
pub const MAX_COMPETITIVE_ROUNDS: u32 = 5;

/// Ticks an agent stays out of `COMPETITIVE` after giving up.
pub const MAX_COOLDOWN_ROUNDS: u32 = 5;

/// Donkey draws in `0..=100`; draws up to this value obstruct, the rest
/// cooperate.
pub const DONKEY_COMPETITIVE_MAX: u32 = 70;

/// One taxi: identity, mode, score and beliefs, plus its pending plan.
pub struct Agent {
    id:                  AgentId,
    key:                 AgentKey,
    mode:                Mode,
    score:               i64,
    competitive_counter: u32,
    cooldown:            u32,
    roam_next_round:     bool,
    belief:              Belief,
    inbox:               Vec<Message>,
    teammates:           Vec<AgentId>,
    desire:              Intention,
    /// Movement order for roaming, reshuffled before each roam.
    moves:               [Action; 4],
    path:                Path,
    actions:             VecDeque<Action>,
}

impl Agent {
    /// A fresh agent standing at `start` in `ROAM` with its visible places
    /// already computed.
    pub fn new(id: AgentId, key: AgentKey, start: PlaceId, grid: &Grid) -> Self {
        Self {
            id,
            key,
            mode: Mode::Roam,
            score: 0,
            competitive_counter: 0,
            cooldown: 0,
            roam_next_round: false,
            belief: Belief::new(start, grid.visible_from(start)),
            inbox: Vec::new(),
            teammates: Vec::new(),
            desire: Intention::desire(),
            moves: Action::BASIC,
            path: Path::empty(),
            actions: VecDeque::new(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn key(&self) -> AgentKey {
        self.key
    }

    /// Team tag followed by id, e.g. `R0`.
    pub fn name(&self) -> String {
        self.key.to_string()
    }

    #[inline]
    pub fn occupant(&self) -> Occupant {
        Occupant { id: self.id, key: self.key }
    }

    #[inline]
    pub fn score(&self) -> i64 {
        self.score
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }

    #[inline]
    pub fn competitive_counter(&self) -> u32 {
        self.competitive_counter
    }

    #[inline]
    pub fn roam_next_round(&self) -> bool {
        self.roam_next_round
    }

    #[inline]
    pub fn current(&self) -> PlaceId {
        self.belief.current
    }

    pub fn belief(&self) -> &Belief {
        &self.belief
    }

    /// Direct belief access for scenario setup.
    pub fn belief_mut(&mut self) -> &mut Belief {
        &mut self.belief
    }

    pub fn desire(&self) -> Intention {
        self.desire
    }

    pub fn teammates(&self) -> &[AgentId] {
        &self.teammates
    }

    pub fn set_teammates(&mut self, teammates: Vec<AgentId>) {
        self.teammates = teammates;
    }

    pub fn inbox(&self) -> &[Message] {
        &self.inbox
    }

    /// Append a message to the inbox.  It is read on this agent's next tick.
    pub fn deliver(&mut self, message: Message) {
        self.inbox.push(message);
    }

    /// Switch mode, logging only real changes.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode {
            info!(agent = %self.key, from = %self.mode, to = %mode, "mode changed");
            self.mode = mode;
        }
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Run one decision cycle and return the messages it produced.
    ///
    /// # Errors
    /// Only on internal inconsistency: a path step that is not a single move,
    /// or a transferring agent with nobody on board.
    pub fn tick(&mut self, ctx: &mut TickContext<'_>) -> AgentResult<Vec<Message>> {
        let mut outbox = Vec::new();
        trace!(agent = %self.key, tick = %ctx.tick, mode = %self.mode, "tick start");

        self.cooldown = self.cooldown.saturating_sub(1);
        self.perceive(ctx);
        self.read_inbox(&mut outbox);
        self.belief.prune_stale(ctx.occupancy);
        self.send_messages(ctx, &mut outbox);
        self.arbitrate(ctx.rng);
        self.run_intention(ctx, self.desire, &mut outbox)?;
        self.belief.visible = ctx.grid.visible_from(self.belief.current);

        Ok(outbox)
    }

    fn perceive(&mut self, ctx: &mut TickContext<'_>) {
        let teammate_places: Vec<PlaceId> = self
            .teammates
            .iter()
            .filter_map(|&t| ctx.entry(t))
            .map(|e| e.current)
            .collect();
        self.belief.observe(self.key, ctx.occupancy, teammate_places);
    }

    // ── Messaging ─────────────────────────────────────────────────────────

    fn send(&self, outbox: &mut Vec<Message>, message: Message) {
        info!(
            agent = %self.key,
            to = %message.recipient.key,
            kind = %message.kind,
            places = message.content.len(),
            "sent message"
        );
        outbox.push(message);
    }

    fn reply(&self, outbox: &mut Vec<Message>, to: &Message, kind: MessageKind) {
        info!(agent = %self.key, to = %to.sender.key, kind = %kind, "replied");
        outbox.push(to.reply(kind));
    }

    pub(crate) fn read_inbox(&mut self, outbox: &mut Vec<Message>) {
        for message in std::mem::take(&mut self.inbox) {
            info!(
                agent = %self.key,
                from = %message.sender.key,
                kind = %message.kind,
                "read message"
            );
            match message.kind {
                MessageKind::Confirm | MessageKind::Deny => {}
                MessageKind::ClientLocation => {
                    for &place in &message.content {
                        self.belief.remember_client_location(place);
                    }
                    self.reply(outbox, &message, MessageKind::Confirm);
                }
                MessageKind::AssistInBlocking => {
                    if self.mode == Mode::Transfering || self.cooldown > 0 {
                        self.reply(outbox, &message, MessageKind::Deny);
                    } else {
                        self.set_mode(Mode::Competitive);
                        self.reply(outbox, &message, MessageKind::Confirm);
                    }
                }
            }
        }
    }

    fn send_messages(&mut self, ctx: &mut TickContext<'_>, outbox: &mut Vec<Message>) {
        let me = self.occupant();

        if self.belief.knows_client_location() {
            for &t in &self.teammates {
                let Some(mate) = ctx.entry(t) else { continue };
                if mate.current != self.belief.current {
                    continue;
                }
                let known = &self.belief.client_locations;
                self.send(
                    outbox,
                    Message::new(me, mate.occupant(), MessageKind::ClientLocation, known.clone()),
                );
                // Anyone in the surrounding places overhears, whatever their team.
                for place in self.belief.surroundings() {
                    for &other in ctx.occupancy.agents(place) {
                        self.send(
                            outbox,
                            Message::new(me, other, MessageKind::ClientLocation, known.clone()),
                        );
                    }
                }
            }
        }

        if self.mode == Mode::Competitive {
            'search: for &place in &self.belief.visible {
                if !ctx.occupancy.has_opposing_agent(place, self.key) {
                    continue;
                }
                for &t in &self.teammates {
                    let Some(mate) = ctx.entry(t) else { continue };
                    if mate.visible.contains(&place) {
                        self.send(
                            outbox,
                            Message::new(me, mate.occupant(), MessageKind::AssistInBlocking, Vec::new()),
                        );
                        break 'search;
                    }
                }
            }
        }
    }

    // ── Mode arbiter ──────────────────────────────────────────────────────

    fn arbitrate(&mut self, rng: &mut SimRng) {
        if self.mode == Mode::Transfering {
            return;
        }
        let seen = self.belief.opponent_visible();
        let knows = self.belief.knows_client_location();
        let ready = self.cooldown == 0;

        let next = match self.key.team {
            Team::Rooster => {
                if seen && ready {
                    Mode::Competitive
                } else if knows {
                    Mode::KnowsClientLocation
                } else {
                    self.mode
                }
            }
            Team::Donkey => {
                let r: u32 = rng.gen_range(0..=100);
                let competing = self.mode == Mode::Competitive;
                if seen && ready && (r <= DONKEY_COMPETITIVE_MAX || competing) {
                    Mode::Competitive
                } else if seen && !competing && r > DONKEY_COMPETITIVE_MAX {
                    Mode::OpponentCooperative
                } else if knows {
                    Mode::KnowsClientLocation
                } else {
                    self.mode
                }
            }
        };
        self.set_mode(next);
    }

    // ── Plans ─────────────────────────────────────────────────────────────

    fn run_mode(&mut self, ctx: &mut TickContext<'_>, outbox: &mut Vec<Message>) -> AgentResult<()> {
        match self.mode {
            Mode::Roam => {
                self.roam(ctx, outbox)?;
            }
            Mode::KnowsClientLocation => self.seek_client(ctx, outbox)?,
            Mode::Transfering => self.transfer(ctx, outbox)?,
            Mode::Competitive => self.compete(ctx, outbox)?,
            Mode::OpponentCooperative => self.cooperate(ctx, outbox)?,
        }
        Ok(())
    }

    fn run_plan(
        &mut self,
        ctx: &mut TickContext<'_>,
        plan: &[Intention],
        outbox: &mut Vec<Message>,
    ) -> AgentResult<bool> {
        for &intention in plan {
            if !self.run_intention(ctx, intention, outbox)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn roam(&mut self, ctx: &mut TickContext<'_>, outbox: &mut Vec<Message>) -> AgentResult<bool> {
        ctx.rng.shuffle(&mut self.moves);
        self.run_plan(ctx, &plan_for(Mode::Roam, None), outbox)
    }

    /// Nearest remembered client first; roam if none can be reached.
    fn seek_client(&mut self, ctx: &mut TickContext<'_>, outbox: &mut Vec<Message>) -> AgentResult<()> {
        let here = ctx.grid.coords(self.belief.current);
        let mut goals = self.belief.client_locations.clone();
        goals.sort_by_key(|&g| here.distance_sq(ctx.grid.coords(g)));

        for goal in goals {
            if self.run_plan(ctx, &plan_for(Mode::KnowsClientLocation, Some(goal)), outbox)? {
                return Ok(());
            }
        }
        self.set_mode(Mode::Roam);
        self.roam(ctx, outbox)?;
        Ok(())
    }

    fn transfer(&mut self, ctx: &mut TickContext<'_>, outbox: &mut Vec<Message>) -> AgentResult<()> {
        if self.roam_next_round {
            self.roam_next_round = false;
            self.set_mode(Mode::Roam);
            self.roam(ctx, outbox)?;
            self.set_mode(Mode::Transfering);
            return Ok(());
        }

        let destination = self
            .belief
            .on_board
            .first()
            .map(|c| c.destination)
            .ok_or(AgentError::NoPassenger(self.key))?;

        if !self.run_plan(ctx, &plan_for(Mode::Transfering, Some(destination)), outbox)? {
            self.set_mode(Mode::Roam);
            self.roam(ctx, outbox)?;
            self.set_mode(Mode::Transfering);
            self.roam_next_round = true;
        }
        Ok(())
    }

    /// Move next to the first visible opponent, nearest flank first.
    fn compete(&mut self, ctx: &mut TickContext<'_>, outbox: &mut Vec<Message>) -> AgentResult<()> {
        let Some(&target) = self.belief.opponents.first() else {
            self.give_up_competing();
            self.roam(ctx, outbox)?;
            return Ok(());
        };

        let here = self.belief.current;
        let origin = ctx.grid.coords(here);
        let mut flanks: Vec<PlaceId> = ctx
            .grid
            .traversable(target)
            .iter()
            .copied()
            .filter(|&p| !ctx.occupancy.has_teammate(p, self.key))
            .collect();
        flanks.sort_by_key(|&p| origin.distance_sq(ctx.grid.coords(p)));

        if flanks.first() == Some(&here) {
            if self.count_competitive_round() {
                self.roam(ctx, outbox)?;
            }
            return Ok(());
        }
        for flank in flanks {
            if self.run_plan(ctx, &plan_for(Mode::Competitive, Some(flank)), outbox)? {
                if self.count_competitive_round() {
                    self.roam(ctx, outbox)?;
                }
                return Ok(());
            }
        }

        self.give_up_competing();
        self.roam(ctx, outbox)?;
        Ok(())
    }

    /// Returns `true` once the round limit is hit and the agent has given up.
    fn count_competitive_round(&mut self) -> bool {
        self.competitive_counter += 1;
        debug!(agent = %self.key, round = self.competitive_counter, "obstructing");
        if self.competitive_counter >= MAX_COMPETITIVE_ROUNDS {
            self.give_up_competing();
            return true;
        }
        false
    }

    fn give_up_competing(&mut self) {
        self.set_mode(Mode::Roam);
        self.cooldown = MAX_COOLDOWN_ROUNDS;
        self.competitive_counter = 0;
    }

    fn cooperate(&mut self, ctx: &mut TickContext<'_>, outbox: &mut Vec<Message>) -> AgentResult<()> {
        let me = self.occupant();
        for place in self.belief.surroundings() {
            for &other in ctx.occupancy.agents(place) {
                if self.key.opposes(other.key) {
                    let known = self.belief.client_locations.clone();
                    self.send(outbox, Message::new(me, other, MessageKind::ClientLocation, known));
                }
            }
        }
        self.set_mode(Mode::Roam);
        self.roam(ctx, outbox)?;
        Ok(())
    }

    // ── Intentions ────────────────────────────────────────────────────────

    fn run_intention(
        &mut self,
        ctx: &mut TickContext<'_>,
        intention: Intention,
        outbox: &mut Vec<Message>,
    ) -> AgentResult<bool> {
        match intention.kind {
            IntentionKind::GetHighestScore => {
                self.run_mode(ctx, outbox)?;
                Ok(true)
            }
            IntentionKind::FindClient => {
                for action in self.moves {
                    if self.execute(ctx, action).succeeded {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            IntentionKind::CalculatePath => {
                let Some(goal) = intention.goal else { return Ok(false) };
                Ok(self.calculate_path(ctx, goal))
            }
            IntentionKind::CalculateNextAction => self.set_next_action(ctx),
            IntentionKind::ExecuteNextAction => {
                while let Some(action) = self.actions.pop_front() {
                    self.execute(ctx, action);
                }
                self.path.clear();
                Ok(self.actions.is_empty())
            }
        }
    }

    fn calculate_path(&mut self, ctx: &mut TickContext<'_>, goal: PlaceId) -> bool {
        let current = self.belief.current;
        let query = RouteQuery {
            agent: self.key,
            start: current,
            goal,
            current,
            visible: &self.belief.visible,
        };
        self.path = ctx.router.route(ctx.grid, ctx.occupancy, query);

        let found = current == goal || self.path.len() > 1;
        if found {
            info!(agent = %self.key, goal = %ctx.grid.coords(goal), steps = self.path.len(), "path found");
        } else {
            info!(agent = %self.key, goal = %ctx.grid.coords(goal), "no path");
        }
        found
    }

    fn set_next_action(&mut self, ctx: &mut TickContext<'_>) -> AgentResult<bool> {
        let here = self.belief.current;
        let queued = self.actions.len();
        let at_destination = self.belief.on_board.first().is_some_and(|c| c.destination == here);

        if at_destination && self.mode == Mode::Transfering {
            self.actions.push_back(Action::Disembark);
            self.set_mode(Mode::Roam);
        } else if self.mode == Mode::KnowsClientLocation
            && ctx.grid.state(here).is_town()
            && ctx.occupancy.has_available_client(here)
        {
            self.actions.push_back(Action::Embark);
            self.set_mode(Mode::Transfering);
        } else if let Some((from, to)) = self.path.take_step() {
            let action = Action::between(ctx.grid, from, to).ok_or(AgentError::InvalidStep {
                from: ctx.grid.coords(from),
                to:   ctx.grid.coords(to),
            })?;
            self.actions.push_back(action);
        }
        Ok(self.actions.len() > queued)
    }

    /// Apply one action: score its cost, then move the agent and its
    /// passengers if it left the place.
    fn execute(&mut self, ctx: &mut TickContext<'_>, action: Action) -> ActionResult {
        let from = self.belief.current;
        let result = action.evaluate(ctx.grid, ctx.occupancy, self.key, &mut self.belief);
        self.score += result.total_cost;

        if !result.succeeded {
            debug!(agent = %self.key, action = %action, cost = result.total_cost, "did not move");
            return result;
        }
        if result.next != from {
            ctx.occupancy.remove_agent(from, self.id);
            ctx.occupancy.add_agent(result.next, self.occupant());
            for client in &self.belief.on_board {
                ctx.occupancy.move_client(from, result.next, client.id);
            }
            self.belief.current = result.next;
            debug!(
                agent = %self.key,
                action = %action,
                from = %ctx.grid.coords(from),
                to = %ctx.grid.coords(result.next),
                "moved"
            );
        } else {
            debug!(agent = %self.key, action = %action, cost = result.total_cost, "acted in place");
        }
        result
    }
}
