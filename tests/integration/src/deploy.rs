use anyhow::{anyhow, bail, Result as AnyResult};
use cosmwasm_std::{from_json, Addr, Api, Empty, Uint128};
use cw_multi_test::{App, Bank, Contract, ContractWrapper, Executor};
use lottery_common::network::NetworkConfig;
use lottery_vrf_coordinator_mock::msg::{
    CreateSubscriptionResponse, ExecuteMsg as CoordinatorExecuteMsg,
    InstantiateMsg as CoordinatorInstantiateMsg,
};

/// Flat fee charged per fulfilment: 0.25 LINK.
pub const BASE_FEE: u128 = 250_000_000_000_000_000;

/// Price per unit of callback gas.
pub const GAS_PRICE_LINK: u128 = 1_000_000_000;

/// Credit given to a fresh development subscription: 30 LINK.
pub const SUBSCRIPTION_FUND_AMOUNT: u128 = 30_000_000_000_000_000_000;

/// Contracts deployed only on development chains.
#[derive(Clone, Debug)]
pub struct Mocks {
    pub vrf_coordinator: Addr,
}

/// Addresses of a deployed lottery and the coordinator it talks to.
#[derive(Clone, Debug)]
pub struct Deployment {
    pub lottery: Addr,
    pub vrf_coordinator: Addr,
    pub subscription_id: u64,
}

pub fn lottery_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        lottery_raffle::contract::execute,
        lottery_raffle::contract::instantiate,
        lottery_raffle::contract::query,
    )
    .with_reply(lottery_raffle::contract::reply)
    .with_migrate(lottery_raffle::contract::migrate);
    Box::new(contract)
}

pub fn vrf_coordinator_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        lottery_vrf_coordinator_mock::contract::execute,
        lottery_vrf_coordinator_mock::contract::instantiate,
        lottery_vrf_coordinator_mock::contract::query,
    );
    Box::new(contract)
}

/// Deploy the coordinator mock. Returns `None` on chains that already have a
/// live coordinator.
pub fn deploy_mocks<B: Bank>(
    app: &mut App<B>,
    deployer: &Addr,
    network: &NetworkConfig,
) -> AnyResult<Option<Mocks>> {
    if !network.is_development() {
        return Ok(None);
    }

    let code_id = app.store_code(vrf_coordinator_contract());
    let vrf_coordinator = app.instantiate_contract(
        code_id,
        deployer.clone(),
        &CoordinatorInstantiateMsg {
            base_fee: Uint128::new(BASE_FEE),
            gas_price_link: Uint128::new(GAS_PRICE_LINK),
        },
        &[],
        "vrf-coordinator-mock",
        None,
    )?;

    Ok(Some(Mocks { vrf_coordinator }))
}

/// Deploy the lottery.
///
/// On development chains a subscription is created on the mock coordinator,
/// funded, and the lottery is registered as its consumer. Elsewhere the
/// coordinator and subscription come from the network config.
pub fn deploy_lottery<B: Bank>(
    app: &mut App<B>,
    deployer: &Addr,
    network: &NetworkConfig,
    mocks: Option<&Mocks>,
) -> AnyResult<Deployment> {
    network.validate()?;

    let (vrf_coordinator, subscription_id) = if network.is_development() {
        let mocks = mocks.ok_or_else(|| anyhow!("{} needs mocks deployed first", network.name))?;
        let coordinator = mocks.vrf_coordinator.clone();

        let res = app.execute_contract(
            deployer.clone(),
            coordinator.clone(),
            &CoordinatorExecuteMsg::CreateSubscription {},
            &[],
        )?;
        let data = res
            .data
            .ok_or_else(|| anyhow!("create subscription returned no data"))?;
        let created: CreateSubscriptionResponse = from_json(data)?;

        app.execute_contract(
            deployer.clone(),
            coordinator.clone(),
            &CoordinatorExecuteMsg::FundSubscription {
                sub_id: created.sub_id,
                amount: Uint128::new(SUBSCRIPTION_FUND_AMOUNT),
            },
            &[],
        )?;

        (coordinator, created.sub_id)
    } else {
        let (Some(address), Some(sub_id)) = (&network.vrf_coordinator, network.subscription_id)
        else {
            bail!("{} has no coordinator or subscription configured", network.name);
        };
        (app.api().addr_validate(address)?, sub_id)
    };

    let code_id = app.store_code(lottery_contract());
    let lottery = app.instantiate_contract(
        code_id,
        deployer.clone(),
        &lottery_raffle::msg::InstantiateMsg {
            vrf_coordinator: vrf_coordinator.to_string(),
            entrance_fee: network.entrance_fee,
            denom: network.denom.clone(),
            gas_lane: network.gas_lane.clone(),
            subscription_id,
            callback_gas_limit: network.callback_gas_limit,
            interval: network.interval,
        },
        &[],
        "lottery",
        Some(deployer.to_string()),
    )?;

    if network.is_development() {
        app.execute_contract(
            deployer.clone(),
            vrf_coordinator.clone(),
            &CoordinatorExecuteMsg::AddConsumer {
                sub_id: subscription_id,
                consumer: lottery.to_string(),
            },
            &[],
        )?;
    }

    Ok(Deployment {
        lottery,
        vrf_coordinator,
        subscription_id,
    })
}

/// Run the whole pipeline: mocks, then the lottery.
pub fn deploy_all<B: Bank>(
    app: &mut App<B>,
    deployer: &Addr,
    network: &NetworkConfig,
) -> AnyResult<Deployment> {
    let mocks = deploy_mocks(app, deployer, network)?;
    deploy_lottery(app, deployer, network, mocks.as_ref())
}
