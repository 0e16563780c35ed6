use libc::c_char;
use monty_hall::{GameState, MontyHallEngine, MontyHallError, Phase, Strategy};
use std::cmp;
use std::convert::TryFrom;
use std::ptr;
use strum_macros::Display;

#[repr(C)]
#[derive(Clone, Copy, Eq, PartialEq, Display, Debug)]
pub enum CError {
    Ok,
    InvalidInput,
    NullPointerAsInput,
    IndexIsOutOfRange,
    InvalidPhase,
    InvalidParameters,
    NoData,
    UnexpectedError,
}

impl From<&MontyHallError> for CError {
    fn from(error: &MontyHallError) -> CError {
        match error {
            MontyHallError::OutOfRange { .. } => CError::IndexIsOutOfRange,
            MontyHallError::InvalidPhase { .. } => CError::InvalidPhase,
            MontyHallError::InvalidParameters { .. } => CError::InvalidParameters,
        }
    }
}

// A null error info pointer only skips the report, the call still returns early.
macro_rules! return_error {
    ($error_info_ptr:ident, $error_code:expr, $error_msg:expr) => {{
        if !$error_info_ptr.is_null() {
            let error_info = unsafe { &mut *$error_info_ptr };
            let error_message: &str = &$error_msg;
            if !error_message.is_empty()
                && error_info.error_message_max_length > 0
                && !error_info.error_message.is_null()
            {
                let len_without_terminator = cmp::min(
                    usize::try_from(error_info.error_message_max_length - 1)
                        .unwrap_or(usize::MAX),
                    error_message.len(),
                );
                unsafe {
                    ptr::copy_nonoverlapping(
                        error_message.as_ptr(),
                        error_info.error_message as *mut u8,
                        len_without_terminator,
                    );
                    *error_info.error_message.add(len_without_terminator) = 0;
                }
                error_info.error_message_length = len_without_terminator as u64;
            }
            error_info.error_code = $error_code;
        }
        return;
    }};
    ($error_info_ptr:ident, $error_code:expr) => {{
        let error_code = $error_code;
        return_error!($error_info_ptr, error_code, error_code.to_string());
    }};
}

macro_rules! return_or_assign {
    ($x:expr, $error_info_ptr:ident, $error_code:expr) => {
        match $x {
            Ok(value) => value,
            Err(error_msg) => {
                return_error!($error_info_ptr, $error_code, error_msg);
            }
        }
    };
    ($x:expr, $error_info_ptr:ident) => {
        match $x {
            Ok(value) => value,
            Err(error) => {
                let error_code = CError::from(&error);
                return_error!($error_info_ptr, error_code, error.to_string());
            }
        }
    };
}

macro_rules! initialize_to_ok {
    ($error_info_ptr:ident) => {
        if !$error_info_ptr.is_null() {
            let error_info = unsafe { &mut *$error_info_ptr };
            error_info.error_code = CError::Ok;
            error_info.error_message_length = 0;
        }
    };
}

// Based on this https://s3.amazonaws.com/temp.michaelfbryan.com/objects/index.html

/// One engine together with the round it is currently playing.
pub struct Session {
    engine: MontyHallEngine,
    round: GameState,
}

impl Session {
    fn new(mut engine: MontyHallEngine) -> Session {
        let round = engine.new_round();
        Session { engine, round }
    }
}

#[repr(C)]
pub struct COutcome {
    phase: Phase,
    won: bool,
    switched: bool,
    winner_index: u64,
}

#[repr(C)]
pub struct CStatistics {
    switch_wins: u64,
    switch_games: u64,
    stay_wins: u64,
    stay_games: u64,
}

#[repr(C)]
pub struct CErrorInfo {
    error_code: CError,
    error_message_length: u64,
    error_message_max_length: u64,
    error_message: *mut c_char,
}

fn convert_index_u64_to_usize(index: u64) -> Result<usize, &'static str> {
    usize::try_from(index).map_err(|_| "Index is too big to convert to usize!")
}

fn convert_index_usize_to_u64(index: usize) -> Result<u64, &'static str> {
    u64::try_from(index).map_err(|_| "Index is too big to convert to u64!")
}

fn store_session(
    session_ptr_ptr: *mut *mut Session,
    engine: MontyHallEngine,
    c_ei_ptr: *mut CErrorInfo,
) {
    if session_ptr_ptr.is_null() {
        return_error!(c_ei_ptr, CError::NullPointerAsInput);
    }
    let session_ptr = unsafe { &mut *session_ptr_ptr };
    if !session_ptr.is_null() {
        return_error!(c_ei_ptr, CError::InvalidInput);
    }

    *session_ptr = Box::into_raw(Box::new(Session::new(engine)));
}

#[no_mangle]
pub extern "C" fn montyhall_new_session(
    session_ptr_ptr: *mut *mut Session,
    c_ei_ptr: *mut CErrorInfo,
) {
    initialize_to_ok!(c_ei_ptr);
    store_session(session_ptr_ptr, MontyHallEngine::new(), c_ei_ptr);
}

#[no_mangle]
pub extern "C" fn montyhall_new_seeded_session(
    session_ptr_ptr: *mut *mut Session,
    seed: u64,
    c_ei_ptr: *mut CErrorInfo,
) {
    initialize_to_ok!(c_ei_ptr);
    store_session(session_ptr_ptr, MontyHallEngine::with_seed(seed), c_ei_ptr);
}

#[no_mangle]
pub extern "C" fn montyhall_destroy_session(session_ptr: *mut Session) {
    if session_ptr.is_null() {
        return;
    }
    drop(unsafe { Box::from_raw(session_ptr) });
}

#[no_mangle]
pub extern "C" fn montyhall_new_round(session_ptr: *mut Session, c_ei_ptr: *mut CErrorInfo) {
    initialize_to_ok!(c_ei_ptr);
    if session_ptr.is_null() {
        return_error!(c_ei_ptr, CError::NullPointerAsInput);
    }
    let session = unsafe { &mut *session_ptr };
    session.round = session.engine.new_round();
}

#[no_mangle]
pub extern "C" fn montyhall_get_phase(
    session_ptr: *mut Session,
    phase_ptr: *mut Phase,
    c_ei_ptr: *mut CErrorInfo,
) {
    initialize_to_ok!(c_ei_ptr);
    if session_ptr.is_null() || phase_ptr.is_null() {
        return_error!(c_ei_ptr, CError::NullPointerAsInput);
    }
    let session = unsafe { &*session_ptr };
    let phase = unsafe { &mut *phase_ptr };
    *phase = session.round.get_phase();
}

#[no_mangle]
pub extern "C" fn montyhall_pick_first(
    session_ptr: *mut Session,
    door: u64,
    opened_door_ptr: *mut u64,
    c_ei_ptr: *mut CErrorInfo,
) {
    initialize_to_ok!(c_ei_ptr);
    if session_ptr.is_null() || opened_door_ptr.is_null() {
        return_error!(c_ei_ptr, CError::NullPointerAsInput);
    }
    let udoor = return_or_assign!(
        convert_index_u64_to_usize(door),
        c_ei_ptr,
        CError::IndexIsOutOfRange
    );
    let session = unsafe { &mut *session_ptr };
    let round = return_or_assign!(session.engine.pick_first(session.round, udoor), c_ei_ptr);
    let opened_door_index = return_or_assign!(
        round.get_opened_door().ok_or("The host did not open a door!"),
        c_ei_ptr,
        CError::UnexpectedError
    );
    let opened_door = unsafe { &mut *opened_door_ptr };
    *opened_door = return_or_assign!(
        convert_index_usize_to_u64(opened_door_index),
        c_ei_ptr,
        CError::UnexpectedError
    );
    session.round = round;
}

#[no_mangle]
pub extern "C" fn montyhall_pick_final(
    session_ptr: *mut Session,
    door: u64,
    c_outcome_ptr: *mut COutcome,
    c_ei_ptr: *mut CErrorInfo,
) {
    initialize_to_ok!(c_ei_ptr);
    if session_ptr.is_null() || c_outcome_ptr.is_null() {
        return_error!(c_ei_ptr, CError::NullPointerAsInput);
    }
    let udoor = return_or_assign!(
        convert_index_u64_to_usize(door),
        c_ei_ptr,
        CError::IndexIsOutOfRange
    );
    let session = unsafe { &mut *session_ptr };
    let round = return_or_assign!(session.engine.pick_final(session.round, udoor), c_ei_ptr);
    let winner_index = return_or_assign!(
        convert_index_usize_to_u64(round.get_winner_index()),
        c_ei_ptr,
        CError::UnexpectedError
    );
    let c_outcome = unsafe { &mut *c_outcome_ptr };
    c_outcome.phase = round.get_phase();
    c_outcome.won = round.get_won().unwrap_or(false);
    c_outcome.switched = round.get_switched().unwrap_or(false);
    c_outcome.winner_index = winner_index;
    session.round = round;
}

#[no_mangle]
pub extern "C" fn montyhall_win_rate(
    session_ptr: *mut Session,
    strategy: Strategy,
    win_rate_ptr: *mut f64,
    c_ei_ptr: *mut CErrorInfo,
) {
    initialize_to_ok!(c_ei_ptr);
    if session_ptr.is_null() || win_rate_ptr.is_null() {
        return_error!(c_ei_ptr, CError::NullPointerAsInput);
    }
    let session = unsafe { &*session_ptr };
    let win_rate = unsafe { &mut *win_rate_ptr };
    *win_rate = return_or_assign!(
        session
            .engine
            .win_rate(strategy)
            .ok_or("No game was finished with this strategy!"),
        c_ei_ptr,
        CError::NoData
    );
}

#[no_mangle]
pub extern "C" fn montyhall_get_statistics(
    session_ptr: *mut Session,
    c_statistics_ptr: *mut CStatistics,
    c_ei_ptr: *mut CErrorInfo,
) {
    initialize_to_ok!(c_ei_ptr);
    if session_ptr.is_null() || c_statistics_ptr.is_null() {
        return_error!(c_ei_ptr, CError::NullPointerAsInput);
    }
    let statistics = unsafe { &*session_ptr }.engine.statistics();
    let c_statistics = unsafe { &mut *c_statistics_ptr };
    c_statistics.switch_wins = statistics.get_wins(Strategy::Switch);
    c_statistics.switch_games = statistics.get_games(Strategy::Switch);
    c_statistics.stay_wins = statistics.get_wins(Strategy::Stay);
    c_statistics.stay_games = statistics.get_games(Strategy::Stay);
}

#[no_mangle]
pub extern "C" fn montyhall_simulate(
    session_ptr: *mut Session,
    n_rounds: u64,
    strategy: Strategy,
    win_rate_ptr: *mut f64,
    c_ei_ptr: *mut CErrorInfo,
) {
    initialize_to_ok!(c_ei_ptr);
    if session_ptr.is_null() || win_rate_ptr.is_null() {
        return_error!(c_ei_ptr, CError::NullPointerAsInput);
    }
    let session = unsafe { &mut *session_ptr };
    let win_rate = unsafe { &mut *win_rate_ptr };
    *win_rate = return_or_assign!(
        session
            .engine
            .simulate(n_rounds, strategy)
            .ok_or("Zero rounds were simulated!"),
        c_ei_ptr,
        CError::NoData
    );
}

#[no_mangle]
pub extern "C" fn montyhall_simulate_generalized(
    session_ptr: *mut Session,
    door_count: u64,
    number_of_doors_to_open: u64,
    n_rounds: u64,
    strategy: Strategy,
    win_rate_ptr: *mut f64,
    c_ei_ptr: *mut CErrorInfo,
) {
    initialize_to_ok!(c_ei_ptr);
    if session_ptr.is_null() || win_rate_ptr.is_null() {
        return_error!(c_ei_ptr, CError::NullPointerAsInput);
    }
    let udoor_count = return_or_assign!(
        convert_index_u64_to_usize(door_count),
        c_ei_ptr,
        CError::InvalidParameters
    );
    let unumber_of_doors_to_open = return_or_assign!(
        convert_index_u64_to_usize(number_of_doors_to_open),
        c_ei_ptr,
        CError::InvalidParameters
    );
    let session = unsafe { &mut *session_ptr };
    let rate = return_or_assign!(
        session.engine.simulate_generalized(
            udoor_count,
            unumber_of_doors_to_open,
            n_rounds,
            strategy
        ),
        c_ei_ptr
    );
    let win_rate = unsafe { &mut *win_rate_ptr };
    *win_rate = return_or_assign!(
        rate.ok_or("Zero rounds were simulated!"),
        c_ei_ptr,
        CError::NoData
    );
}
