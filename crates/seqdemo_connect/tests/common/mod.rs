#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use alloy::primitives::{Address, B256, Bytes};
use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Notify;

use seqdemo_chain::{ARBITRUM_ONE, ARBITRUM_SEPOLIA, ChainId, ContractCall, ETHEREUM, POLYGON};
use seqdemo_connect::{
    ChainSummary, ConnectError, PublicClient, SwitchStatus, Wallet, WalletClient, WalletConnector,
};

pub fn alice() -> Address {
    Address::repeat_byte(0xa1)
}

pub fn bob() -> Address {
    Address::repeat_byte(0xb0)
}

struct MockState {
    wallets: Vec<(Address, Option<String>)>,
    active: Option<Address>,
    chains: Vec<ChainSummary>,
    active_chain: Option<ChainId>,
    switch_status: SwitchStatus,
    modal_open: bool,
    sent: Vec<(ChainId, ContractCall)>,
}

/// Scriptable wallet session.
pub struct MockConnector {
    state: Mutex<MockState>,
    verify_result: bool,
    sign_error: Option<ConnectError>,
    no_accounts: bool,
    send_result: Result<Option<B256>, ConnectError>,
    switch_gate: Option<Arc<Notify>>,
    slow_switch: bool,
    switch_calls: AtomicUsize,
}

impl MockConnector {
    pub fn new() -> Self {
        let chains = [
            (ARBITRUM_SEPOLIA, "Arbitrum Sepolia"),
            (ARBITRUM_ONE, "Arbitrum One"),
            (ETHEREUM, "Ethereum"),
            (POLYGON, "Polygon"),
        ]
        .into_iter()
        .map(|(id, name)| ChainSummary { id, name })
        .collect();
        Self {
            state: Mutex::new(MockState {
                wallets: Vec::new(),
                active: None,
                chains,
                active_chain: Some(ARBITRUM_SEPOLIA),
                switch_status: SwitchStatus::Idle,
                modal_open: false,
                sent: Vec::new(),
            }),
            verify_result: true,
            sign_error: None,
            no_accounts: false,
            send_result: Ok(Some(B256::repeat_byte(0x5c))),
            switch_gate: None,
            slow_switch: false,
            switch_calls: AtomicUsize::new(0),
        }
    }

    /// Connect `address`; the first wallet added becomes active.
    pub fn with_wallet(self, address: Address, name: Option<&str>) -> Self {
        {
            let mut state = self.state.lock();
            state.wallets.push((address, name.map(str::to_string)));
            if state.active.is_none() {
                state.active = Some(address);
            }
        }
        self
    }

    pub fn with_chain(self, chain_id: Option<ChainId>) -> Self {
        self.state.lock().active_chain = chain_id;
        self
    }

    pub fn with_no_chains(self) -> Self {
        self.state.lock().chains.clear();
        self
    }

    pub fn with_verify_result(mut self, valid: bool) -> Self {
        self.verify_result = valid;
        self
    }

    pub fn with_sign_error(mut self, err: ConnectError) -> Self {
        self.sign_error = Some(err);
        self
    }

    pub fn with_no_accounts(mut self) -> Self {
        self.no_accounts = true;
        self
    }

    pub fn with_send_result(mut self, result: Result<Option<B256>, ConnectError>) -> Self {
        self.send_result = result;
        self
    }

    pub fn with_switch_gate(mut self, gate: Arc<Notify>) -> Self {
        self.switch_gate = Some(gate);
        self
    }

    /// Yield to the scheduler before reporting the switch as pending.
    pub fn with_slow_switch(mut self) -> Self {
        self.slow_switch = true;
        self
    }

    pub fn set_switch_status(&self, status: SwitchStatus) {
        self.state.lock().switch_status = status;
    }

    pub fn send_calls(&self) -> usize {
        self.state.lock().sent.len()
    }

    pub fn last_sent(&self) -> Option<(ChainId, ContractCall)> {
        self.state.lock().sent.last().cloned()
    }

    pub fn switch_calls(&self) -> usize {
        self.switch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WalletConnector for MockConnector {
    fn wallets(&self) -> Vec<Wallet> {
        let state = self.state.lock();
        state
            .wallets
            .iter()
            .map(|(address, name)| Wallet {
                address: *address,
                name: name.clone(),
                is_active: state.active == Some(*address),
            })
            .collect()
    }

    fn set_active_wallet(&self, address: Address) -> Result<(), ConnectError> {
        let mut state = self.state.lock();
        if !state.wallets.iter().any(|(a, _)| *a == address) {
            return Err(ConnectError::UnknownWallet(address));
        }
        state.active = Some(address);
        Ok(())
    }

    fn disconnect_wallet(&self, address: Address) -> Result<(), ConnectError> {
        let mut state = self.state.lock();
        state.wallets.retain(|(a, _)| *a != address);
        if state.active == Some(address) {
            state.active = None;
        }
        Ok(())
    }

    fn set_connect_modal_open(&self, open: bool) {
        self.state.lock().modal_open = open;
    }

    fn is_connect_modal_open(&self) -> bool {
        self.state.lock().modal_open
    }

    fn chains(&self) -> Vec<ChainSummary> {
        self.state.lock().chains.clone()
    }

    fn active_chain_id(&self) -> Option<ChainId> {
        self.state.lock().active_chain
    }

    fn switch_status(&self) -> SwitchStatus {
        self.state.lock().switch_status.clone()
    }

    async fn switch_chain(&self, chain_id: ChainId) -> Result<(), ConnectError> {
        self.switch_calls.fetch_add(1, Ordering::SeqCst);
        if self.slow_switch {
            tokio::task::yield_now().await;
        }
        self.state.lock().switch_status = SwitchStatus::Pending(chain_id);
        if let Some(gate) = &self.switch_gate {
            gate.notified().await;
        }
        let mut state = self.state.lock();
        state.active_chain = Some(chain_id);
        state.switch_status = SwitchStatus::Success(chain_id);
        Ok(())
    }

    async fn send_transaction(
        &self,
        chain_id: ChainId,
        call: ContractCall,
    ) -> Result<Option<B256>, ConnectError> {
        self.state.lock().sent.push((chain_id, call));
        self.send_result.clone()
    }

    fn wallet_client(&self) -> Option<Arc<dyn WalletClient>> {
        let address = self.state.lock().active?;
        Some(Arc::new(MockWalletClient {
            accounts: if self.no_accounts { Vec::new() } else { vec![address] },
            error: self.sign_error.clone(),
        }))
    }

    fn public_client(&self, _chain_id: ChainId) -> Option<Arc<dyn PublicClient>> {
        Some(Arc::new(MockPublicClient {
            result: self.verify_result,
        }))
    }
}

struct MockWalletClient {
    accounts: Vec<Address>,
    error: Option<ConnectError>,
}

#[async_trait]
impl WalletClient for MockWalletClient {
    async fn addresses(&self) -> Result<Vec<Address>, ConnectError> {
        Ok(self.accounts.clone())
    }

    async fn sign_message(&self, _account: Address, _message: &str) -> Result<Bytes, ConnectError> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(Bytes::from(vec![0x11; 65])),
        }
    }
}

struct MockPublicClient {
    result: bool,
}

#[async_trait]
impl PublicClient for MockPublicClient {
    async fn verify_message(
        &self,
        _address: Address,
        _message: &str,
        _signature: &[u8],
    ) -> Result<bool, ConnectError> {
        Ok(self.result)
    }
}
